#![allow(dead_code)]

use std::{
    sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use reparto_planner::order::DeliveryOrder;
use reparto_providers::{
    directions_route::{DirectionsRoute, RouteLeg},
    error::ProviderError,
    routing_provider::RoutingProvider,
    routing_request::RoutingRequest,
};

pub fn order(id: &str, quantity: u32, commune: Option<&str>) -> DeliveryOrder {
    let n = id.bytes().map(|b| b as f64).sum::<f64>();

    DeliveryOrder {
        order_id: id.to_owned(),
        customer_name: format!("Cliente {id}"),
        quantity,
        commune: commune.map(str::to_owned),
        latitude: Some(-33.40 - (n % 17.0) / 100.0),
        longitude: Some(-70.60 - (n % 13.0) / 100.0),
        raw_address: format!("Calle {id}"),
        product_name: Some(String::from("Bidón 20L")),
    }
}

pub fn orders(count: usize, quantity: u32, commune: &str) -> Vec<DeliveryOrder> {
    (0..count)
        .map(|i| order(&format!("{commune}-{i}"), quantity, Some(commune)))
        .collect()
}

pub enum Answer {
    /// Visit the waypoints in reverse input order
    Reverse,
    Status(&'static str),
    /// Sleep before answering in reverse order
    Slow(Duration),
}

/// Scripted provider that records every request it receives.
pub struct ScriptedProvider {
    answers: Vec<Answer>,
    calls: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    requests: Mutex<Vec<RoutingRequest>>,
    ready: bool,
}

impl ScriptedProvider {
    /// Answers are used in call order, the last one repeats.
    pub fn new(answers: Vec<Answer>) -> Self {
        Self {
            answers,
            calls: AtomicUsize::new(0),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
            ready: true,
        }
    }

    pub fn not_ready() -> Self {
        Self {
            ready: false,
            ..Self::new(vec![Answer::Reverse])
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<RoutingRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn reverse(request: &RoutingRequest) -> DirectionsRoute {
        DirectionsRoute {
            legs: vec![
                RouteLeg {
                    distance_meters: 750.0,
                    duration_seconds: 90.0,
                    distance_text: String::from("0,8 km"),
                    duration_text: String::from("2 min"),
                };
                request.waypoints.len() + 1
            ],
            waypoint_order: (0..request.waypoints.len()).rev().collect(),
            polyline: Some(String::from("abc")),
        }
    }
}

impl RoutingProvider for ScriptedProvider {
    fn ensure_ready(&self) -> Result<(), ProviderError> {
        if self.ready {
            Ok(())
        } else {
            Err(ProviderError::NotReady(String::from("maps client not loaded")))
        }
    }

    async fn route(&self, request: &RoutingRequest) -> Result<DirectionsRoute, ProviderError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());

        let in_flight = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(in_flight, Ordering::SeqCst);

        let answer = &self.answers[call.min(self.answers.len() - 1)];
        let result = match answer {
            Answer::Reverse => Ok(Self::reverse(request)),
            Answer::Status(status) => Err(ProviderError::Status {
                status: String::from(*status),
                message: String::from("scripted"),
            }),
            Answer::Slow(duration) => {
                tokio::time::sleep(*duration).await;
                Ok(Self::reverse(request))
            }
        };

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        result
    }
}
