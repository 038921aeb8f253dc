//! Named solids with cut provenance.

use hedra_kernel::Solid;
use std::fmt;
use thiserror::Error;

/// Errors raised by the assembly pipeline.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AssemblyError {
    /// A cut left the target with no material.
    #[error("cutting \"{target}\" by \"{cutter}\" left no material")]
    DegenerateCut {
        /// Name of the piece being cut.
        target: String,
        /// Name of the piece that was subtracted.
        cutter: String,
    },
    /// A piece entered the pipeline with no geometry.
    #[error("piece \"{name}\" has no geometry")]
    EmptyPiece {
        /// Name of the offending piece.
        name: String,
    },
}

/// One provenance event: `target` had `cutter`'s volume removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CutRecord {
    /// Name of the piece that was cut.
    pub target: String,
    /// Name of the piece that did the cutting.
    pub cutter: String,
}

impl fmt::Display for CutRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} cut by {}", self.target, self.cutter)
    }
}

/// Receiver for cut provenance events.
///
/// Injected into [`Piece::cut`] so geometry code never decides where
/// diagnostics go.
pub trait ProvenanceSink {
    /// Accept one cut event.
    fn record(&mut self, record: CutRecord);
}

/// A [`ProvenanceSink`] that keeps every event, in order.
#[derive(Debug, Clone, Default)]
pub struct CutLedger {
    records: Vec<CutRecord>,
}

impl CutLedger {
    /// An empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded events, oldest first.
    pub fn records(&self) -> &[CutRecord] {
        &self.records
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl ProvenanceSink for CutLedger {
    fn record(&mut self, record: CutRecord) {
        self.records.push(record);
    }
}

/// A named solid plus the cuts that shaped it.
///
/// Pieces are immutable: cutting returns a new piece with the same
/// name, the reduced solid, and the extended history. Names are
/// diagnostics only, but should be unique within one assembly.
#[derive(Debug, Clone)]
pub struct Piece {
    name: String,
    solid: Solid,
    history: Vec<CutRecord>,
}

impl Piece {
    /// Wrap a solid under a name, with empty history.
    pub fn new(name: impl Into<String>, solid: Solid) -> Self {
        Self {
            name: name.into(),
            solid,
            history: Vec::new(),
        }
    }

    /// The piece's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The piece's geometry.
    pub fn solid(&self) -> &Solid {
        &self.solid
    }

    /// The cuts applied to this piece, oldest first.
    pub fn history(&self) -> &[CutRecord] {
        &self.history
    }

    /// Subtract `cutter`'s volume, returning the cut piece.
    ///
    /// Neither input is modified. One event goes to `events`; a result
    /// with no material left is an error, never silently replaced by
    /// the uncut geometry.
    pub fn cut(
        &self,
        cutter: &Piece,
        events: &mut dyn ProvenanceSink,
    ) -> Result<Piece, AssemblyError> {
        let solid = self.solid.difference(cutter.solid());
        if solid.is_empty() || solid.volume() <= 0.0 {
            return Err(AssemblyError::DegenerateCut {
                target: self.name.clone(),
                cutter: cutter.name.clone(),
            });
        }
        let record = CutRecord {
            target: self.name.clone(),
            cutter: cutter.name.clone(),
        };
        log::debug!("{record}");
        events.record(record.clone());

        let mut history = self.history.clone();
        history.push(record);
        Ok(Piece {
            name: self.name.clone(),
            solid,
            history,
        })
    }

    /// Apply [`Piece::cut`] for each cutter, left to right.
    pub fn cut_all(
        &self,
        cutters: &[Piece],
        events: &mut dyn ProvenanceSink,
    ) -> Result<Piece, AssemblyError> {
        let mut piece = self.clone();
        for cutter in cutters {
            piece = piece.cut(cutter, events)?;
        }
        Ok(piece)
    }
}
