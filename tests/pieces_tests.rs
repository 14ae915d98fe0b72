//! Piece catalog and rotation tests against the public API.

use blockfall::core::{base_shape, Piece};
use blockfall::types::PieceKind;

/// Collect a shape into a readable row-major bool matrix.
fn matrix(shape: &blockfall::core::Shape) -> Vec<Vec<bool>> {
    (0..shape.rows())
        .map(|r| (0..shape.cols()).map(|c| shape.filled(r, c)).collect())
        .collect()
}

#[test]
fn catalog_matches_the_canonical_spawn_shapes() {
    assert_eq!(
        matrix(&base_shape(PieceKind::I)),
        vec![vec![true, true, true, true]]
    );
    assert_eq!(
        matrix(&base_shape(PieceKind::T)),
        vec![vec![false, true, false], vec![true, true, true]]
    );
    assert_eq!(
        matrix(&base_shape(PieceKind::J)),
        vec![vec![true, false, false], vec![true, true, true]]
    );
    assert_eq!(
        matrix(&base_shape(PieceKind::L)),
        vec![vec![false, false, true], vec![true, true, true]]
    );
}

#[test]
fn clockwise_rotation_is_the_matrix_transform() {
    // T: [[.X.],[XXX]] rotated right becomes [[X.],[XX],[X.]].
    let t = base_shape(PieceKind::T).rotated_cw();
    assert_eq!(
        matrix(&t),
        vec![
            vec![true, false],
            vec![true, true],
            vec![true, false],
        ]
    );

    // J: [[X..],[XXX]] rotated right becomes [[XX],[X.],[X.]].
    let j = base_shape(PieceKind::J).rotated_cw();
    assert_eq!(
        matrix(&j),
        vec![
            vec![true, true],
            vec![true, false],
            vec![true, false],
        ]
    );
}

#[test]
fn four_right_rotations_return_every_shape_to_itself() {
    for kind in PieceKind::ALL {
        let shape = base_shape(kind);
        let mut rotated = shape;
        for _ in 0..4 {
            rotated = rotated.rotated_cw();
        }
        assert_eq!(rotated, shape, "{:?}", kind);
    }
}

#[test]
fn counter_rotation_undoes_rotation_for_pieces_too() {
    for kind in PieceKind::ALL {
        let piece = Piece::spawn(kind, 10);
        let roundtrip = piece.rotated_cw().rotated_ccw();
        assert_eq!(roundtrip, piece, "{:?}", kind);
        // Position is never touched by rotation.
        let rotated = piece.rotated_ccw();
        assert_eq!((rotated.x, rotated.y), (piece.x, piece.y));
    }
}

#[test]
fn spawn_positions_center_each_kind() {
    for kind in PieceKind::ALL {
        let piece = Piece::spawn(kind, 10);
        let expected_x = 5 - base_shape(kind).cols() as i16 / 2;
        assert_eq!(piece.x, expected_x, "{:?}", kind);
        assert_eq!(piece.y, 0, "{:?}", kind);
    }
}
