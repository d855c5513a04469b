//! Phase sequencing for the worker pool.
//!
//! The pipeline is a fixed sequence of phases; each phase writes a
//! partition-disjoint subset of shared state and later phases read what
//! earlier ones wrote. Workers announce phase completion through
//! [`PhaseBarrier::complete`], which blocks until every worker arrives,
//! making phase N's writes visible before any worker starts phase N+1.

use std::sync::Barrier;

use tracing::trace;

/// Pipeline phases, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Bicubic downscaling of an oversized source (skipped when the
    /// source already fits the rescale bound).
    Rescale,
    /// Step-aligned sampling of the interior grid cells.
    InteriorSamples,
    /// Sampling of the grid's last column from boundary pixels.
    EdgeColumnSamples,
    /// Sampling of the grid's last row from boundary pixels.
    EdgeRowSamples,
    /// Marching-squares tile compositing; its barrier doubles as the
    /// completion fence before the output is written.
    March,
}

impl Phase {
    pub fn name(self) -> &'static str {
        match self {
            Phase::Rescale => "rescale",
            Phase::InteriorSamples => "interior_samples",
            Phase::EdgeColumnSamples => "edge_column_samples",
            Phase::EdgeRowSamples => "edge_row_samples",
            Phase::March => "march",
        }
    }
}

/// Rendezvous point shared by all workers of one pipeline run.
pub struct PhaseBarrier {
    barrier: Barrier,
}

impl PhaseBarrier {
    pub fn new(workers: usize) -> Self {
        Self {
            barrier: Barrier::new(workers),
        }
    }

    /// Block until every worker has finished `phase`.
    pub fn complete(&self, phase: Phase) {
        trace!(phase = phase.name(), "waiting at phase barrier");
        self.barrier.wait();
    }
}
