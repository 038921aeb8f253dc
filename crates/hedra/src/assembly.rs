//! The fixed cut order that turns panel groups into fabricable pieces.

use crate::piece::{AssemblyError, Piece, ProvenanceSink};

/// Cut two panel groups against each other and against connectors.
///
/// The order is authoritative:
/// 1. every secondary panel is cut by every primary panel;
/// 2. every panel from both groups is cut by every connector;
/// 3. connectors are never cut.
///
/// Returns the resulting panels plus the untouched connectors as one
/// flat collection. Any cut that leaves a panel without material aborts
/// the whole assembly.
pub fn assemble(
    primary: &[Piece],
    secondary: &[Piece],
    connectors: &[Piece],
    events: &mut dyn ProvenanceSink,
) -> Result<Vec<Piece>, AssemblyError> {
    for piece in primary.iter().chain(secondary).chain(connectors) {
        if piece.solid().is_empty() {
            return Err(AssemblyError::EmptyPiece {
                name: piece.name().to_string(),
            });
        }
    }

    let mut cut_secondary = Vec::with_capacity(secondary.len());
    for panel in secondary {
        cut_secondary.push(panel.cut_all(primary, events)?);
    }

    let mut out = Vec::with_capacity(primary.len() + secondary.len() + connectors.len());
    for panel in primary {
        out.push(panel.cut_all(connectors, events)?);
    }
    for panel in &cut_secondary {
        out.push(panel.cut_all(connectors, events)?);
    }
    out.extend(connectors.iter().cloned());
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::CutLedger;
    use hedra_kernel::Solid;
    use hedra_kernel_math::Point3;
    use hedra_kernel_mesh::Aabb3;

    fn block(name: &str, min: [f64; 3], max: [f64; 3]) -> Piece {
        Piece::new(
            name,
            Solid::box_solid(&Aabb3::new(
                Point3::new(min[0], min[1], min[2]),
                Point3::new(max[0], max[1], max[2]),
            ))
            .unwrap(),
        )
    }

    #[test]
    fn test_secondary_cut_by_primary_only() {
        let primary = vec![block("p", [0.0, 0.0, 0.0], [2.0, 2.0, 2.0])];
        let secondary = vec![block("s", [1.0, 0.0, 0.0], [3.0, 2.0, 2.0])];
        let mut ledger = CutLedger::new();

        let out = assemble(&primary, &secondary, &[], &mut ledger).unwrap();
        assert_eq!(out.len(), 2);
        let p = out.iter().find(|p| p.name() == "p").unwrap();
        let s = out.iter().find(|p| p.name() == "s").unwrap();
        assert!((p.solid().volume() - 8.0).abs() < 1e-9, "primary is untouched");
        assert!((s.solid().volume() - 4.0).abs() < 1e-9, "secondary lost the overlap");
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.records()[0].to_string(), "s cut by p");
    }

    #[test]
    fn test_connectors_cut_both_groups_but_survive() {
        let primary = vec![block("p", [0.0, 0.0, 0.0], [2.0, 2.0, 2.0])];
        let secondary = vec![block("s", [4.0, 0.0, 0.0], [6.0, 2.0, 2.0])];
        // A rod passing through both panels.
        let connectors = vec![block("rod", [-1.0, 0.5, 0.5], [7.0, 1.5, 1.5])];
        let mut ledger = CutLedger::new();

        let out = assemble(&primary, &secondary, &connectors, &mut ledger).unwrap();
        assert_eq!(out.len(), 3);
        let p = out.iter().find(|p| p.name() == "p").unwrap();
        let s = out.iter().find(|p| p.name() == "s").unwrap();
        let rod = out.iter().find(|p| p.name() == "rod").unwrap();
        assert!((p.solid().volume() - 6.0).abs() < 1e-9);
        assert!((s.solid().volume() - 6.0).abs() < 1e-9);
        assert!((rod.solid().volume() - 8.0).abs() < 1e-9, "connectors are never cut");
        // s by p (disjoint, still recorded), p by rod, s by rod.
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn test_empty_piece_rejected() {
        let primary = vec![Piece::new("void", Solid::empty())];
        let err = assemble(&primary, &[], &[], &mut CutLedger::new()).unwrap_err();
        assert_eq!(err, AssemblyError::EmptyPiece { name: "void".into() });
    }

    #[test]
    fn test_degenerate_cut_aborts() {
        let primary = vec![block("big", [0.0, 0.0, 0.0], [10.0, 10.0, 10.0])];
        let secondary = vec![block("inside", [2.0, 2.0, 2.0], [3.0, 3.0, 3.0])];
        let err = assemble(&primary, &secondary, &[], &mut CutLedger::new()).unwrap_err();
        assert!(
            matches!(err, AssemblyError::DegenerateCut { .. }),
            "a fully swallowed panel must abort, got {err}"
        );
    }
}
