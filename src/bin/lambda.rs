//! HTTP Lambda serving stateless simulator runs
//!
//! POST a simulator form as JSON, e.g.
//! `{"investmentType": "acoes", "initialAmount": "1000", "months": 12}`,
//! and receive the projected summary.

use finance_edu::simulator::{Simulator, SimulatorForm};
use finance_edu::PlatformConfig;
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use serde_json::json;

fn json_response(status: u16, body: serde_json::Value) -> Result<Response<Body>, Error> {
    let response = Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Body::Text(body.to_string()))?;
    Ok(response)
}

/// Answer one request: 400 for a malformed body, the summary otherwise.
/// An empty body runs the defaults.
fn respond(simulator: &Simulator, event: &Request) -> Result<Response<Body>, Error> {
    let form: SimulatorForm = match event.body().as_ref() {
        [] => SimulatorForm::default(),
        bytes => match serde_json::from_slice(bytes) {
            Ok(form) => form,
            Err(e) => {
                log::warn!("Rejected malformed request body: {}", e);
                return json_response(400, json!({ "error": format!("Invalid request body: {}", e) }));
            }
        },
    };

    let summary = simulator.summarize(&form);
    log::info!(
        "Simulated {} over {} months: final={:.2}",
        summary.investment_type.id(),
        summary.input.months,
        summary.result.final_value
    );
    json_response(200, serde_json::to_value(summary)?)
}

async fn function_handler(simulator: &Simulator, event: Request) -> Result<Response<Body>, Error> {
    respond(simulator, &event)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    let config_path = std::env::var("FINANCE_EDU_CONFIG").ok();
    let config = PlatformConfig::load_or_default(config_path.as_deref().map(std::path::Path::new))?;
    let simulator = Simulator::new(&config);

    run(service_fn(|event: Request| function_handler(&simulator, event))).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(body: Body) -> (u16, serde_json::Value) {
        let simulator = Simulator::new(&PlatformConfig::default());
        let response = respond(&simulator, &Request::new(body)).expect("response");
        let json = match response.body() {
            Body::Text(text) => serde_json::from_str(text).expect("json body"),
            other => panic!("unexpected body {:?}", other),
        };
        (response.status().as_u16(), json)
    }

    #[test]
    fn test_empty_body_runs_defaults() {
        let (status, json) = call(Body::Empty);
        assert_eq!(status, 200);
        assert_eq!(json["investment_type"], "renda-fixa");
        assert_eq!(json["input"]["months"], 12);
        let final_value = json["result"]["final_value"].as_f64().expect("number");
        assert!((final_value - 3500.34).abs() < 0.01);
    }

    #[test]
    fn test_malformed_body_is_bad_request() {
        let (status, json) = call(Body::from("{bad"));
        assert_eq!(status, 400);
        assert!(json["error"].as_str().expect("message").starts_with("Invalid request body"));
    }

    #[test]
    fn test_camel_case_body_with_numbers() {
        let (status, json) = call(Body::from(
            r#"{"investmentType":"acoes","initialAmount":"2000","months":24,"periodicRatePercent":1,"monthlyContribution":"abc"}"#,
        ));
        assert_eq!(status, 200);
        assert_eq!(json["investment_type"], "acoes");
        assert_eq!(json["input"]["initial_amount"], 2000.0);
        assert_eq!(json["input"]["months"], 24);
        assert_eq!(json["input"]["periodic_rate_percent"], 1.0);
        assert_eq!(json["input"]["monthly_contribution"], 200.0);
    }
}
