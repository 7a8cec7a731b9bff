// tests/catalog_characterization.rs
#![forbid(unsafe_code)]

/**
 * Characterization tests for the CC1 tile catalog.
 *
 * Locks the set cardinalities, the code<->enum mapping, and the full
 * direction group (rotations, flips, with_dirs) against the values the
 * DAT format depends on.
 */
use cc_levelkit::cc1;
use cc_levelkit::Tile;

#[test]
fn set_cardinalities_match_the_format() {
    assert_eq!(Tile::all().len(), 112);
    assert_eq!(cc1::invalid().len(), 14);
    assert_eq!(cc1::ice().len(), 5);
    assert_eq!(cc1::forces().len(), 5);
    assert_eq!(cc1::walls().len(), 4);
    assert_eq!(cc1::panels().len(), 5);
    assert_eq!(cc1::clone_blocks().len(), 4);
    assert_eq!(cc1::blocks().len(), 5);
    assert_eq!(cc1::players().len(), 4);
    assert_eq!(cc1::ants().len(), 4);
    assert_eq!(cc1::paramecia().len(), 4);
    assert_eq!(cc1::gliders().len(), 4);
    assert_eq!(cc1::fireballs().len(), 4);
    assert_eq!(cc1::tanks().len(), 4);
    assert_eq!(cc1::balls().len(), 4);
    assert_eq!(cc1::walkers().len(), 4);
    assert_eq!(cc1::teeth().len(), 4);
    assert_eq!(cc1::blobs().len(), 4);
    assert_eq!(cc1::monsters().len(), 9 * 4);
    assert_eq!(cc1::mobs().len(), 10 * 4 + 5);
    assert_eq!(cc1::doors().len(), 4);
    assert_eq!(cc1::keys().len(), 4);
    assert_eq!(cc1::boots().len(), 4);
    assert_eq!(cc1::pickups().len(), 9);
    assert_eq!(cc1::buttons().len(), 4);
    assert_eq!(cc1::toggles().len(), 2);
}

#[test]
fn predicates_agree_with_sets() {
    for &t in Tile::all() {
        assert_eq!(cc1::invalid().contains(&t), t.is_invalid(), "{t:?}");
        assert_eq!(cc1::monsters().contains(&t), t.is_monster(), "{t:?}");
        assert_eq!(cc1::mobs().contains(&t), t.is_mob(), "{t:?}");
        assert_eq!(cc1::blocks().contains(&t), t.is_block(), "{t:?}");
        assert_eq!(cc1::players().contains(&t), t.is_player(), "{t:?}");
        assert_eq!(cc1::panels().contains(&t), t.is_panel(), "{t:?}");
        assert_eq!(cc1::pickups().contains(&t), t.is_pickup(), "{t:?}");
        assert_eq!(cc1::buttons().contains(&t), t.is_button(), "{t:?}");
        assert_eq!(cc1::ice().contains(&t), t.is_ice(), "{t:?}");
        assert_eq!(cc1::forces().contains(&t), t.is_force(), "{t:?}");
        assert_eq!(cc1::walls().contains(&t), t.is_wall(), "{t:?}");
    }
}

#[test]
fn code_roundtrips_for_every_tile() {
    for &t in Tile::all() {
        assert_eq!(Tile::from_code(t.code()), Some(t));
    }
    assert_eq!(Tile::from_code(0x6F), Some(Tile::PlayerE));
    assert_eq!(Tile::from_code(0x70), None);
    assert_eq!(Tile::from_code(0xFF), None);
}

#[test]
fn compass_families_rotate_clockwise() {
    let families: [[Tile; 4]; 12] = [
        [Tile::PlayerN, Tile::PlayerE, Tile::PlayerS, Tile::PlayerW],
        [Tile::BlobN, Tile::BlobE, Tile::BlobS, Tile::BlobW],
        [Tile::WalkerN, Tile::WalkerE, Tile::WalkerS, Tile::WalkerW],
        [Tile::TeethN, Tile::TeethE, Tile::TeethS, Tile::TeethW],
        [Tile::GliderN, Tile::GliderE, Tile::GliderS, Tile::GliderW],
        [Tile::TankN, Tile::TankE, Tile::TankS, Tile::TankW],
        [Tile::BallN, Tile::BallE, Tile::BallS, Tile::BallW],
        [Tile::FireballN, Tile::FireballE, Tile::FireballS, Tile::FireballW],
        [Tile::AntN, Tile::AntE, Tile::AntS, Tile::AntW],
        [Tile::ForceN, Tile::ForceE, Tile::ForceS, Tile::ForceW],
        [Tile::CloneBlockN, Tile::CloneBlockE, Tile::CloneBlockS, Tile::CloneBlockW],
        [Tile::PanelN, Tile::PanelE, Tile::PanelS, Tile::PanelW],
    ];
    for [n, e, s, w] in families {
        assert_eq!(n.right(), e);
        assert_eq!(e.right(), s);
        assert_eq!(s.right(), w);
        assert_eq!(w.right(), n);
        assert_eq!(n.left(), w);
        assert_eq!(e.left(), n);
        assert_eq!(s.left(), e);
        assert_eq!(w.left(), s);
        assert_eq!(n.reverse(), s);
        assert_eq!(e.reverse(), w);
        assert_eq!(s.reverse(), n);
        assert_eq!(w.reverse(), e);
    }
}

#[test]
fn ice_corners_rotate_clockwise() {
    let (nw, ne, sw, se) = (Tile::IceNW, Tile::IceNE, Tile::IceSW, Tile::IceSE);
    assert_eq!(nw.right(), ne);
    assert_eq!(ne.right(), se);
    assert_eq!(se.right(), sw);
    assert_eq!(sw.right(), nw);
    assert_eq!(nw.left(), sw);
    assert_eq!(ne.left(), nw);
    assert_eq!(sw.left(), se);
    assert_eq!(se.left(), ne);
    assert_eq!(nw.reverse(), se);
    assert_eq!(ne.reverse(), sw);
}

#[test]
fn rotationally_fixed_tiles_stay_put() {
    for &t in Tile::all() {
        let directional = !t.dirs().is_empty() && t != Tile::PanelSE;
        if !directional {
            assert_eq!(t.right(), t, "{t:?}");
            assert_eq!(t.left(), t, "{t:?}");
            assert_eq!(t.reverse(), t, "{t:?}");
        }
    }
    // The two special cases: a direction suffix that must not rotate,
    // and a force floor with no direction at all.
    assert_eq!(Tile::PanelSE.right(), Tile::PanelSE);
    assert_eq!(Tile::ForceRandom.right(), Tile::ForceRandom);
}

#[test]
fn direction_group_laws_hold_for_every_tile() {
    for &t in Tile::all() {
        assert_eq!(t.left().left().left().left(), t, "{t:?}");
        assert_eq!(t.reverse().reverse(), t, "{t:?}");
        assert_eq!(t.right().right().right(), t.left(), "{t:?}");
        assert_eq!(t.flip_horizontal().flip_horizontal(), t, "{t:?}");
        assert_eq!(t.flip_vertical().flip_vertical(), t, "{t:?}");
        assert_eq!(t.flip_ne_sw().flip_ne_sw(), t, "{t:?}");
        assert_eq!(t.flip_nw_se().flip_nw_se(), t, "{t:?}");
    }
}

#[test]
fn dirs_and_with_dirs_cases() {
    assert_eq!(Tile::TankN.dirs(), "N");
    assert_eq!(Tile::IceSE.dirs(), "SE");
    assert_eq!(Tile::PanelSE.dirs(), "SE");
    assert_eq!(Tile::Wall.dirs(), "");
    assert_eq!(Tile::ForceRandom.dirs(), "");

    assert_eq!(Tile::TankN.left(), Tile::TankW);
    assert_eq!(Tile::IceSE.with_dirs("NW"), Tile::IceNW);
    assert_eq!(Tile::TankN.with_dirs("E"), Tile::TankE);
    // No sibling in the family: identity.
    assert_eq!(Tile::PanelSE.with_dirs("SW"), Tile::PanelSE);
    assert_eq!(Tile::Wall.with_dirs("N"), Tile::Wall);
    // Mismatched suffix shape: identity.
    assert_eq!(Tile::TankN.with_dirs("NE"), Tile::TankN);
}

#[test]
fn flips_move_directions_the_right_way() {
    assert_eq!(Tile::TankE.flip_horizontal(), Tile::TankW);
    assert_eq!(Tile::TankN.flip_horizontal(), Tile::TankN);
    assert_eq!(Tile::TankN.flip_vertical(), Tile::TankS);
    assert_eq!(Tile::TankE.flip_vertical(), Tile::TankE);
    assert_eq!(Tile::TankN.flip_ne_sw(), Tile::TankE);
    assert_eq!(Tile::TankS.flip_ne_sw(), Tile::TankW);
    assert_eq!(Tile::TankN.flip_nw_se(), Tile::TankW);
    assert_eq!(Tile::TankS.flip_nw_se(), Tile::TankE);

    assert_eq!(Tile::IceNE.flip_horizontal(), Tile::IceNW);
    assert_eq!(Tile::IceSE.flip_vertical(), Tile::IceNE);
    assert_eq!(Tile::IceNE.flip_ne_sw(), Tile::IceNE);
    assert_eq!(Tile::IceSE.flip_ne_sw(), Tile::IceSW);
    assert_eq!(Tile::IceSE.flip_nw_se(), Tile::IceSE);
    assert_eq!(Tile::IceNE.flip_nw_se(), Tile::IceNW);
}
