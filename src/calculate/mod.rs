//! Ranking and aggregation kernel.
//!
//! Pure computations over caller-owned records:
//! - Peak power per ranked mode for one player
//! - Ordered, ranked leaderboards with deterministic tie-breaking
//!
//! Nothing here touches storage or the network; callers validate input
//! at the boundary (see `boards`) and own the results.

mod peaks;
mod rank;

pub use peaks::compute_peaks;
pub use rank::rank;
