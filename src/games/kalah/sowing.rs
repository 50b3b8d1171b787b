//! Stone distribution.

use tracing::trace;

use crate::core::{PitId, Player, BOARD_SIZE};

/// Where a sowing pass ended and what it did on the way.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Sowing {
    /// Final pit that received a stone.
    pub last: PitId,
    /// Stones dropped, always the source's original count.
    pub sown: u32,
    /// Times the opponent's store was passed over.
    pub skipped: u32,
}

/// Empty `source` and drop its stones one per pit in sowing order.
///
/// The opponent's store is passed over without consuming a stone; the
/// mover's own store is sown like any other pit. Sowing an empty source is a
/// no-op that reports `last == source`.
pub(crate) fn sow(pits: &mut [u32; BOARD_SIZE], source: PitId, mover: Player) -> Sowing {
    let skip = PitId::store(mover.other());
    let stones = std::mem::take(&mut pits[source.index()]);

    let mut pit = source;
    let mut remaining = stones;
    let mut skipped = 0;
    while remaining > 0 {
        pit = pit.next_sow();
        if pit == skip {
            skipped += 1;
            trace!(%mover, %pit, "skipping opponent store");
            continue;
        }
        pits[pit.index()] += 1;
        remaining -= 1;
    }

    Sowing {
        last: pit,
        sown: stones,
        skipped,
    }
}
