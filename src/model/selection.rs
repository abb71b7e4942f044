// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! The selection store.
//!
//! An ordered, append-only sequence of chosen track identifiers shared between
//! the autocomplete and recommendation controllers. It is split into a writer
//! half, which can only append, and a reader half, which can only take
//! snapshots and wait for changes. Duplicates are kept.

use tokio::sync::watch;

use crate::model::TrackId;

/// Creates an empty store, returning its writer and reader halves.
pub(crate) fn selection_store() -> (SelectionWriter, SelectionReader) {
    let (tx, rx) = watch::channel(Vec::new());

    (SelectionWriter { tx }, SelectionReader { rx })
}

pub(crate) struct SelectionWriter {
    tx: watch::Sender<Vec<TrackId>>,
}

impl SelectionWriter {
    pub(crate) fn append(&self, id: TrackId) {
        // send_modify succeeds even when the reader has gone away
        self.tx.send_modify(|ids| ids.push(id));
    }
}

pub(crate) struct SelectionReader {
    rx: watch::Receiver<Vec<TrackId>>,
}

impl SelectionReader {
    /// Waits until the sequence changes after the last [`snapshot`].
    ///
    /// Returns `false` once the writer has been dropped, after which no
    /// further change can ever be observed.
    ///
    /// [`snapshot`]: SelectionReader::snapshot
    pub(crate) async fn changed(&mut self) -> bool {
        self.rx.changed().await.is_ok()
    }

    /// Takes a copy of the current sequence and marks it as seen.
    pub(crate) fn snapshot(&mut self) -> Vec<TrackId> {
        self.rx.borrow_and_update().clone()
    }

    /// Copies the current sequence without marking it as seen.
    pub(crate) fn ids(&self) -> Vec<TrackId> {
        self.rx.borrow().clone()
    }
}
