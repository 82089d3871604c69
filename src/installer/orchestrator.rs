//! Batch installation modes.
//!
//! Each mode iterates its catalog subset in registry order, dispatches one
//! tool at a time, and hands every outcome to the caller's observer. One
//! broken tool must not block installation of the others, so the batch
//! never aborts early and computes no aggregate result.

use crate::catalog::ToolDescriptor;
use crate::platform::Platform;

use super::dispatcher::{Dispatcher, InstallOutcome};

/// Observer invoked once per tool with its outcome.
pub type OutcomeObserver<'o> = dyn FnMut(&ToolDescriptor, &InstallOutcome) + 'o;

/// Runs batch installs over a dispatcher.
pub struct Orchestrator<'a> {
    dispatcher: &'a Dispatcher<'a>,
}

impl<'a> Orchestrator<'a> {
    /// Create an orchestrator over the given dispatcher.
    pub fn new(dispatcher: &'a Dispatcher<'a>) -> Self {
        Self { dispatcher }
    }

    /// Install the essential tools.
    pub fn install_essentials(&self, platform: Platform, observer: &mut OutcomeObserver<'_>) {
        let tools: Vec<_> = self.dispatcher.catalog().essentials().cloned().collect();
        self.run_batch(&tools, platform, observer);
    }

    /// Install the cloud & DevOps tools.
    pub fn install_cloud_devops(&self, platform: Platform, observer: &mut OutcomeObserver<'_>) {
        let tools: Vec<_> = self.dispatcher.catalog().cloud_devops().cloned().collect();
        self.run_batch(&tools, platform, observer);
    }

    /// Install every catalog tool.
    pub fn install_all(&self, platform: Platform, observer: &mut OutcomeObserver<'_>) {
        let tools: Vec<_> = self.dispatcher.catalog().tools().to_vec();
        self.run_batch(&tools, platform, observer);
    }

    fn run_batch(
        &self,
        tools: &[ToolDescriptor],
        platform: Platform,
        observer: &mut OutcomeObserver<'_>,
    ) {
        for tool in tools {
            let outcome = self.dispatcher.install(tool.id, platform);
            if let InstallOutcome::Failed(e) = &outcome {
                tracing::warn!("installing {} failed: {e}", tool.id);
            }
            observer(tool, &outcome);
        }
    }
}
