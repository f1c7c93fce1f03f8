use fxhash::FxHashMap;
use tracing::debug;

use crate::{
    order::{DeliveryOrder, total_quantity},
    route_group::RouteGroup,
};

/// Bottles a delivery vehicle carries in one run.
pub const DEFAULT_VEHICLE_CAPACITY: u32 = 55;

struct ZoneBucket<'a> {
    zone: &'a str,
    orders: Vec<&'a DeliveryOrder>,
    total: u32,
}

/// Collects closed groups and numbers them in creation order.
struct GroupsBuilder {
    groups: Vec<RouteGroup>,
    current: RouteGroup,
}

impl GroupsBuilder {
    fn new() -> Self {
        Self {
            groups: Vec::new(),
            current: RouteGroup::new(1),
        }
    }

    fn flush(&mut self) {
        if self.current.is_empty() {
            return;
        }

        let next = RouteGroup::new(self.current.route_number + 1);
        self.groups.push(std::mem::replace(&mut self.current, next));
    }

    fn extend<'a>(&mut self, orders: impl IntoIterator<Item = &'a DeliveryOrder>) {
        for order in orders {
            self.current.push(order.clone());
        }
    }

    fn finish(mut self) -> Vec<RouteGroup> {
        self.flush();
        self.groups
    }
}

fn bucket_by_zone(orders: &[DeliveryOrder]) -> Vec<ZoneBucket<'_>> {
    let mut buckets: Vec<ZoneBucket> = Vec::new();
    let mut positions: FxHashMap<&str, usize> = FxHashMap::default();

    for order in orders {
        let zone = order.zone();
        let position = *positions.entry(zone).or_insert_with(|| {
            buckets.push(ZoneBucket {
                zone,
                orders: Vec::new(),
                total: 0,
            });
            buckets.len() - 1
        });

        let bucket = &mut buckets[position];
        bucket.orders.push(order);
        bucket.total = bucket.total.saturating_add(order.quantity);
    }

    buckets
}

/// Splits `orders` into vehicle runs of at most `capacity` bottles, keeping
/// the orders of a commune together whenever the commune fits in one run.
///
/// When everything fits in one vehicle the orders are returned untouched in a
/// single group. Otherwise communes are packed greedily, largest first (ties
/// keep first-seen order). A commune larger than `capacity` gets runs of its
/// own, filled order by order. Orders are never split, so an order larger than
/// `capacity` ends up alone in a run that exceeds it.
pub fn group_orders_by_capacity(orders: &[DeliveryOrder], capacity: u32) -> Vec<RouteGroup> {
    if orders.is_empty() {
        return Vec::new();
    }

    let total = total_quantity(orders);
    if total <= capacity {
        return vec![RouteGroup {
            route_number: 1,
            total_quantity: total,
            orders: orders.to_vec(),
        }];
    }

    let mut buckets = bucket_by_zone(orders);
    buckets.sort_by(|a, b| b.total.cmp(&a.total));

    let mut builder = GroupsBuilder::new();

    for bucket in buckets {
        debug!(
            "Packing commune {} ({} orders, {} bottles)",
            bucket.zone,
            bucket.orders.len(),
            bucket.total
        );

        if bucket.total > capacity {
            builder.flush();

            for order in bucket.orders {
                if builder.current.total_quantity.saturating_add(order.quantity) > capacity {
                    builder.flush();
                }
                builder.current.push(order.clone());
            }

            builder.flush();
        } else {
            if builder.current.total_quantity.saturating_add(bucket.total) > capacity {
                builder.flush();
            }
            builder.extend(bucket.orders);
        }
    }

    let groups = builder.finish();
    debug!(
        "Grouped {} orders ({} bottles) into {} routes",
        orders.len(),
        total,
        groups.len()
    );

    groups
}
