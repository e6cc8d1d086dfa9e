use std::future::Future;

use gloo_timers::future::TimeoutFuture;
use log::info;

use crate::admission::form::{Application, FormAction};
use crate::config;

/// Delivers a validated application. There is no failure path: once the form has
/// passed validation, delivery always ends in an acknowledgment.
pub trait Submitter {
    fn submit(&self, application: Application) -> impl Future<Output = ()>;
}

/// Stands in for the admissions office. Waits a fixed delay and logs what would have been sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedSubmitter {
    pub delay_ms: u32,
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self { delay_ms: config::SUBMIT_DELAY_MS }
    }
}

impl Submitter for SimulatedSubmitter {
    fn submit(&self, application: Application) -> impl Future<Output = ()> {
        let delay_ms = self.delay_ms;
        async move {
            TimeoutFuture::new(delay_ms).await;
            info!(
                "Application received for {}",
                application.get("studentName").unwrap_or("unnamed student")
            );
            info!("Form data: {}", application.to_json());
        }
    }
}

/// Runs one submission and reports the outcome back into the form.
pub async fn run_submission<S, D>(submitter: &S, application: Application, dispatch: D)
where
    S: Submitter,
    D: Fn(FormAction),
{
    submitter.submit(application).await;
    dispatch(FormAction::Acknowledge);
}
