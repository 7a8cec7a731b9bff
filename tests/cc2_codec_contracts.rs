// tests/cc2_codec_contracts.rs
#![forbid(unsafe_code)]

/**
 * Contracts for the CC2 element/modifier codec, the map stream codec,
 * and the pack compression.
 *
 * Byte fixtures are hand-computed from the format: wire nibbles,
 * letter glyph values, gate subtype indices, the two-byte railroad
 * pack, and the modifier-prefix shrinking rules.
 */
use proptest::prelude::*;

use cc_levelkit::cc2::{
    self, map, Cell, DirSet, Direction, Element, Gate, GateKind, MapData, TileColor, TileId,
    TrackSegment, TrackSet,
};
use cc_levelkit::Error;

fn elem(id: TileId) -> Element {
    Element::new(id)
}

// -------------------------------------------------------------------------
// Modifier payloads
// -------------------------------------------------------------------------

#[test]
fn wire_modifier_parses_both_nibbles() {
    // 0x92: wires = E, tunnels = N and W.
    let mut e = elem(TileId::Floor);
    cc2::parse_modifier(&mut e, &[0x92]).expect("floor takes wires");
    assert_eq!(e.wires, DirSet::parse("E"));
    assert_eq!(e.wire_tunnels, DirSet::parse("NW"));
    assert_eq!(e.wires.to_string(), "E");
    assert_eq!(e.wire_tunnels.to_string(), "NW");
}

#[test]
fn wire_modifier_builds_both_nibbles() {
    let mut e = elem(TileId::Floor);
    e.wires = DirSet::parse("SE");
    e.wire_tunnels = DirSet::parse("N");
    assert_eq!(cc2::build_modifier(&e).expect("buildable"), vec![0x16]);

    // A switch with wires N+S and an east tunnel packs to 0x25.
    let mut e = elem(TileId::SwitchOn);
    e.wires = DirSet::parse("NS");
    e.wire_tunnels = DirSet::parse("E");
    assert_eq!(cc2::build_modifier(&e).expect("buildable"), vec![0x25]);
}

#[test]
fn wire_modifier_rejects_wrong_lengths() {
    let mut e = elem(TileId::Floor);
    assert!(matches!(
        cc2::parse_modifier(&mut e, &[0x01, 0x02]),
        Err(Error::UnsupportedModifier { .. })
    ));
    assert!(matches!(
        cc2::parse_modifier(&mut e, &[]),
        Err(Error::UnsupportedModifier { .. })
    ));
}

#[test]
fn letter_tile_covers_arrows_ascii_and_garbage() {
    let mut e = elem(TileId::LetterTileSpace);
    cc2::parse_modifier(&mut e, &[0x1E]).expect("arrow glyph");
    assert_eq!(e.letter, Some('↓'));

    cc2::parse_modifier(&mut e, &[0x41]).expect("ascii");
    assert_eq!(e.letter, Some('A'));

    // Below the arrow range: no glyph.
    cc2::parse_modifier(&mut e, &[0x1B]).expect("tolerated");
    assert_eq!(e.letter, None);

    let mut e = elem(TileId::LetterTileSpace);
    e.letter = Some('←');
    assert_eq!(cc2::build_modifier(&e).expect("arrow"), vec![0x1F]);
    e.letter = Some('Z');
    assert_eq!(cc2::build_modifier(&e).expect("ascii"), vec![0x5A]);
    e.letter = Some('ß');
    assert_eq!(cc2::build_modifier(&e).expect("fallback"), vec![0x00]);
    e.letter = None;
    assert_eq!(cc2::build_modifier(&e).expect("empty"), vec![0x00]);
}

#[test]
fn clone_machine_arrows_roundtrip() {
    let mut e = elem(TileId::CloneMachine);
    cc2::parse_modifier(&mut e, &[0x0D]).expect("arrows");
    assert_eq!(e.directions.to_string(), "NSW");

    let mut e = elem(TileId::CloneMachine);
    e.directions = DirSet::parse("NEW");
    assert_eq!(cc2::build_modifier(&e).expect("arrows"), vec![0x0B]);
}

#[test]
fn custom_tile_colors_roundtrip_and_reject_garbage() {
    let mut e = elem(TileId::CustomFloor);
    cc2::parse_modifier(&mut e, &[2]).expect("yellow");
    assert_eq!(e.color, TileColor::Yellow);

    assert!(matches!(
        cc2::parse_modifier(&mut e, &[9]),
        Err(Error::UnsupportedModifier { .. })
    ));

    let mut e = elem(TileId::CustomWall);
    e.color = TileColor::Blue;
    assert_eq!(cc2::build_modifier(&e).expect("blue"), vec![3]);
}

#[test]
fn logic_gate_subtypes_follow_the_index_table() {
    let mut e = elem(TileId::LogicGate);
    cc2::parse_modifier(&mut e, &[0x01]).expect("inverter east");
    assert_eq!(e.gate, Some(Gate::Oriented(GateKind::Inverter, Direction::E)));

    cc2::parse_modifier(&mut e, &[0x23]).expect("counter five");
    assert_eq!(e.gate, Some(Gate::Counter(5)));

    cc2::parse_modifier(&mut e, &[0x3A]).expect("raw voodoo");
    assert_eq!(e.gate, Some(Gate::Raw(0x3A)));

    e.gate = Some(Gate::Oriented(GateKind::Xor, Direction::S));
    assert_eq!(cc2::build_modifier(&e).expect("xor south"), vec![0x0E]);

    e.gate = Some(Gate::Oriented(GateKind::LatchCcw, Direction::N));
    assert_eq!(cc2::build_modifier(&e).expect("ccw latch"), vec![0x40]);

    e.gate = Some(Gate::Counter(9));
    assert_eq!(cc2::build_modifier(&e).expect("counter nine"), vec![0x27]);

    e.gate = Some(Gate::Counter(10));
    assert!(matches!(
        cc2::build_modifier(&e),
        Err(Error::UnsupportedModifier { .. })
    ));
}

#[test]
fn railroad_track_packs_two_bytes() {
    let mut e = elem(TileId::RailroadTrack);
    cc2::parse_modifier(&mut e, &[0x0D, 0x31]).expect("track pack");
    let segs: Vec<TrackSegment> = e.tracks.iter().collect();
    assert_eq!(
        segs,
        [TrackSegment::NE, TrackSegment::SW, TrackSegment::NW]
    );
    assert_eq!(e.active_track, TrackSegment::SE);
    assert_eq!(e.initial_entry, Direction::W);

    let mut e = elem(TileId::RailroadTrack);
    e.tracks = TrackSet::EMPTY;
    for seg in [TrackSegment::SE, TrackSegment::SW, TrackSegment::Vertical] {
        e.tracks.insert(seg);
    }
    e.active_track = TrackSegment::NE;
    e.initial_entry = Direction::S;
    assert_eq!(cc2::build_modifier(&e).expect("track pack"), vec![0x26, 0x20]);

    // One-byte payloads are legal; four-byte ones are not.
    let mut e = elem(TileId::RailroadTrack);
    cc2::parse_modifier(&mut e, &[0x40]).expect("switch only");
    assert!(e.tracks.contains(TrackSegment::Switch));
    assert!(matches!(
        cc2::parse_modifier(&mut e, &[0, 0, 0, 0]),
        Err(Error::UnsupportedModifier { .. })
    ));
}

#[test]
fn thin_wall_and_arrow_bitmask_tables() {
    let cases = [
        ("", false, 0x00u8),
        ("N", false, 0x01),
        ("E", false, 0x02),
        ("S", false, 0x04),
        ("W", false, 0x08),
        ("", true, 0x10),
        ("NW", false, 0x09),
        ("NW", true, 0x19),
        ("NESW", false, 0x0F),
        ("NESW", true, 0x1F),
    ];
    for (dirs, canopy, byte) in cases {
        let mut e = elem(TileId::ThinWallCanopy);
        e.directions = DirSet::parse(dirs);
        e.canopy = canopy;
        assert_eq!(cc2::build_thin_wall(&e), byte, "{dirs} canopy={canopy}");

        let mut parsed = elem(TileId::ThinWallCanopy);
        cc2::parse_thin_wall(&mut parsed, byte);
        assert_eq!(parsed.directions, DirSet::parse(dirs));
        assert_eq!(parsed.canopy, canopy);
    }

    let arrow_cases = [("", 0x00u8), ("NE", 0x03), ("NES", 0x07), ("NW", 0x09)];
    for (dirs, byte) in arrow_cases {
        let mut e = elem(TileId::DirectionalBlock);
        e.directions = DirSet::parse(dirs);
        assert_eq!(cc2::build_arrows(&e), byte);
        let mut parsed = elem(TileId::DirectionalBlock);
        cc2::parse_arrows(&mut parsed, byte);
        assert_eq!(parsed.directions, DirSet::parse(dirs));
    }
}

#[test]
fn plain_terrain_rejects_modifiers() {
    let mut e = elem(TileId::Water);
    assert!(matches!(
        cc2::parse_modifier(&mut e, &[0x00]),
        Err(Error::UnsupportedModifier { .. })
    ));
    assert!(matches!(
        cc2::build_modifier(&e),
        Err(Error::UnsupportedModifier { .. })
    ));
}

proptest! {
    #[test]
    fn wire_and_track_payloads_roundtrip(byte in any::<u8>(), low in any::<u8>(), high_active in 0u8..6, high_entry in 0u8..4) {
        let mut e = elem(TileId::SteelWall);
        cc2::parse_modifier(&mut e, &[byte]).expect("any wire byte parses");
        let rebuilt = cc2::build_modifier(&e).expect("buildable");
        prop_assert_eq!(rebuilt, vec![byte]);

        let mut e = elem(TileId::RailroadTrack);
        let high = (high_entry << 4) | high_active;
        cc2::parse_modifier(&mut e, &[low, high]).expect("any track pack parses");
        let rebuilt = cc2::build_modifier(&e).expect("buildable");
        prop_assert_eq!(rebuilt, vec![low & 0x7F, high]);
    }
}

// -------------------------------------------------------------------------
// Map stream
// -------------------------------------------------------------------------

#[test]
fn decode_reads_layers_until_terrain() {
    // One cell: canopy panel, a west-facing glider, a red key, gravel.
    let bytes = [
        1, 1, // width, height
        TileId::ThinWallCanopy.code(),
        0x10,
        TileId::Glider.code(),
        0x03,
        TileId::RedKey.code(),
        TileId::Gravel.code(),
    ];
    let map = map::decode(&bytes).expect("well-formed map");
    assert_eq!((map.width, map.height), (1, 1));
    let cell = &map.cells[0];
    assert!(cell.panel.as_ref().is_some_and(|e| e.canopy));
    assert!(cell
        .mob
        .as_ref()
        .is_some_and(|e| e.direction == Direction::W));
    assert_eq!(cell.pickup.as_ref().map(|e| e.id), Some(TileId::RedKey));
    assert_eq!(cell.terrain.as_ref().map(|e| e.id), Some(TileId::Gravel));

    assert_eq!(map::encode(&map).expect("encodable"), bytes);
}

#[test]
fn modifier_prefixes_shrink_and_vanish() {
    // Wired floor with a zero mask encodes as bare floor.
    let floor = Cell::terrain(elem(TileId::Floor));
    assert_eq!(
        cc2::encode_cell(&floor).expect("encodable"),
        vec![TileId::Floor.code()]
    );

    // A one-byte modifier gets the 8-bit prefix.
    let mut wired = elem(TileId::Floor);
    wired.wires = DirSet::parse("NS");
    let bytes = cc2::encode_cell(&Cell::terrain(wired.clone())).expect("encodable");
    assert_eq!(bytes, vec![TileId::Modifier8Bit.code(), 0x05, TileId::Floor.code()]);
    let (cell, used) = cc2::decode_cell(&bytes).expect("decodable");
    assert_eq!(used, bytes.len());
    assert_eq!(cell.terrain, Some(wired));

    // A railroad pack with a nonzero high byte needs the 16-bit prefix.
    let mut track = elem(TileId::RailroadTrack);
    track.tracks.insert(TrackSegment::Horizontal);
    track.initial_entry = Direction::E;
    let bytes = cc2::encode_cell(&Cell::terrain(track.clone())).expect("encodable");
    assert_eq!(
        bytes,
        vec![
            TileId::Modifier16Bit.code(),
            0x10,
            0x10,
            TileId::RailroadTrack.code()
        ]
    );
    let (cell, _) = cc2::decode_cell(&bytes).expect("decodable");
    assert_eq!(cell.terrain, Some(track));
}

#[test]
fn map_roundtrip_with_mixed_cells() {
    let mut letter = elem(TileId::LetterTileSpace);
    letter.letter = Some('K');

    let mut gate = elem(TileId::LogicGate);
    gate.gate = Some(Gate::Oriented(GateKind::Nand, Direction::W));

    let mut dblock = elem(TileId::DirectionalBlock);
    dblock.direction = Direction::S;
    dblock.directions = DirSet::parse("NW");

    let mut machine_cell = Cell::terrain({
        let mut m = elem(TileId::CloneMachine);
        m.directions = DirSet::parse("E");
        m
    });
    machine_cell.mob = Some({
        let mut tank = elem(TileId::BlueTank);
        tank.direction = Direction::E;
        tank
    });

    let mut block_cell = Cell::terrain(elem(TileId::Floor));
    block_cell.mob = Some(dblock);

    let map = MapData {
        width: 2,
        height: 2,
        cells: vec![
            Cell::terrain(letter),
            Cell::terrain(gate),
            machine_cell,
            block_cell,
        ],
    };
    let bytes = map::encode(&map).expect("encodable");
    assert_eq!(map::decode(&bytes).expect("decodable"), map);
}

#[test]
fn map_codec_rejects_garbage() {
    assert!(matches!(map::decode(&[]), Err(Error::Truncated(_))));
    // Opcode 0x00 is not a tile.
    assert!(matches!(
        map::decode(&[1, 1, 0x00]),
        Err(Error::UnknownOpcode(0))
    ));
    // Cell never reaches terrain.
    assert!(matches!(
        map::decode(&[1, 1, TileId::RedKey.code()]),
        Err(Error::Truncated(_))
    ));
    // Mob direction byte out of range.
    assert!(matches!(
        map::decode(&[1, 1, TileId::Glider.code(), 9]),
        Err(Error::UnsupportedModifier { .. })
    ));

    let incomplete = Cell::default();
    assert!(matches!(
        map::encode(&MapData {
            width: 1,
            height: 1,
            cells: vec![incomplete]
        }),
        Err(Error::InvariantViolated(_))
    ));
}

// -------------------------------------------------------------------------
// Pack compression
// -------------------------------------------------------------------------

#[test]
fn unpack_handles_literals_and_overlapping_copies() {
    // "abcd" then copy 6 bytes from 4 back: abcdabcdab.
    let packed = [10, 0, 4, b'a', b'b', b'c', b'd', 0x86, 4];
    assert_eq!(cc2::unpack(&packed).expect("well-formed"), b"abcdabcdab");

    // Offset 1 repeats the last byte: classic RLE by overlap.
    let packed = [6, 0, 1, b'x', 0x85, 1];
    assert_eq!(cc2::unpack(&packed).expect("well-formed"), b"xxxxxx");
}

#[test]
fn unpack_rejects_corrupt_streams() {
    assert!(matches!(cc2::unpack(&[5, 0, 4, b'a']), Err(Error::Truncated(_))));
    // Back-reference before the start of output.
    assert!(matches!(
        cc2::unpack(&[4, 0, 1, b'a', 0x83, 9]),
        Err(Error::BadRle(_))
    ));
    // Literal run overshoots the declared length.
    assert!(matches!(
        cc2::unpack(&[1, 0, 2, b'a', b'b']),
        Err(Error::BadRle(_))
    ));
}

#[test]
fn pack_compresses_repetition() {
    let data = vec![0u8; 400];
    let packed = cc2::pack(&data).expect("fits the frame");
    assert!(packed.len() < 20, "400 zeros should pack tight, got {}", packed.len());
    assert_eq!(cc2::unpack(&packed).expect("own output"), data);
}

proptest! {
    #[test]
    fn pack_roundtrips_arbitrary_bytes(data in prop::collection::vec(any::<u8>(), 0..2048)) {
        let packed = cc2::pack(&data).expect("fits the frame");
        prop_assert_eq!(cc2::unpack(&packed).expect("own output"), data);
    }

    #[test]
    fn pack_roundtrips_repetitive_bytes(data in prop::collection::vec(0u8..4, 0..2048)) {
        let packed = cc2::pack(&data).expect("fits the frame");
        prop_assert_eq!(cc2::unpack(&packed).expect("own output"), data);
    }
}
