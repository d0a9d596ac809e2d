use chrono::{SecondsFormat, Utc};
use reqwest::blocking::Client;
use serde::Serialize;

#[derive(Serialize)]
struct Attempt<'a> {
    user_id: &'a str,
    target_letter: &'a str,
    predicted_letter: &'a str,
    correct: bool,
    timestamp: String,
}

fn main() {
    let url = std::env::var("SIGNLOG_HTTP").unwrap_or_else(|_| "http://localhost:8080/log".into());
    let mut args = std::env::args().skip(1);
    let user_id = args.next().unwrap_or_else(|| "demo-user".into());
    let target = args.next().unwrap_or_else(|| "A".into());
    let predicted = args.next().unwrap_or_else(|| target.clone());

    let attempt = Attempt {
        user_id: &user_id,
        target_letter: &target,
        predicted_letter: &predicted,
        correct: target == predicted,
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
    };

    // Transport failures are reported, not fatal.
    let resp = match Client::new().post(url).json(&attempt).send() {
        Ok(resp) => resp,
        Err(e) => {
            println!("[LOG ERROR] {e}");
            return;
        }
    };
    let status = resp.status();
    if status.is_success() {
        println!("[LOG SUCCESS]");
    } else {
        let body = resp.text().unwrap_or_default();
        println!("[LOG FAILED] {} {}", status.as_u16(), body);
    }
}
