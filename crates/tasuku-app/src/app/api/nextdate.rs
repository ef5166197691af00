use salvo::http::StatusCode;
use salvo::writing::Text;
use salvo::{Request, Response, Router, handler};
use tasuku_rule::next_date;
use tasuku_rule::rule::date::parse_date_str;

use super::NEXTDATE_ROUTE_COMPONENT;
use crate::app::today;

/// ## Summary
/// GET /api/nextdate?now=&date=&repeat= - Computes the next occurrence of a rule.
///
/// `now` defaults to the current UTC day. The body is the `YYYYMMDD` result
/// as plain text.
///
/// ## Errors
/// Returns HTTP 400 with a plain text message when `now` is malformed or
/// the rule can't produce a date.
#[handler]
async fn next_date_handler(req: &mut Request, res: &mut Response) {
    let date = req.query::<String>("date").unwrap_or_default();
    let repeat = req.query::<String>("repeat").unwrap_or_default();

    let now = match req.query::<String>("now").filter(|now| !now.is_empty()) {
        None => today(),
        Some(raw) => match parse_date_str(&raw) {
            Ok(now) => now,
            Err(err) => {
                tracing::debug!(now = %raw, error = %err, "Invalid 'now' parameter");
                res.status_code(StatusCode::BAD_REQUEST);
                res.render(Text::Plain(format!("invalid 'now' parameter: {err}")));
                return;
            }
        },
    };

    match next_date(now, &date, &repeat) {
        Ok(next) => res.render(Text::Plain(next)),
        Err(err) => {
            tracing::debug!(%date, %repeat, error = %err, "Failed to compute next date");
            res.status_code(StatusCode::BAD_REQUEST);
            res.render(Text::Plain(format!("failed to compute the new date: {err}")));
        }
    }
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(NEXTDATE_ROUTE_COMPONENT).get(next_date_handler)
}

#[cfg(test)]
#[path = "nextdate_tests.rs"]
mod tests;
