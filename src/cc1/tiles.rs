// src/cc1/tiles.rs
#![forbid(unsafe_code)]

/// Tile codes used by the CC1 DAT map layers, in the range 0x00..=0x6F.
///
/// The discriminant of each variant is the on-disk byte. Codes that the
/// original engine never renders correctly (drowned/burned players,
/// swimming players, the unused slots) are still representable so that
/// damaged files can be inspected; they form the `invalid()` set.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tile {
    Floor = 0x00,
    Wall = 0x01,
    Chip = 0x02,
    Water = 0x03,
    Fire = 0x04,
    InvWallPerm = 0x05,
    PanelN = 0x06,
    PanelW = 0x07,
    PanelS = 0x08,
    PanelE = 0x09,
    Block = 0x0A,
    Dirt = 0x0B,
    Ice = 0x0C,
    ForceS = 0x0D,
    CloneBlockN = 0x0E,
    CloneBlockW = 0x0F,
    CloneBlockS = 0x10,
    CloneBlockE = 0x11,
    ForceN = 0x12,
    ForceE = 0x13,
    ForceW = 0x14,
    Exit = 0x15,
    BlueDoor = 0x16,
    RedDoor = 0x17,
    GreenDoor = 0x18,
    YellowDoor = 0x19,
    IceSE = 0x1A,
    IceSW = 0x1B,
    IceNW = 0x1C,
    IceNE = 0x1D,
    BlueWallFake = 0x1E,
    BlueWallReal = 0x1F,
    NotUsed0 = 0x20,
    Thief = 0x21,
    Socket = 0x22,
    GreenButton = 0x23,
    CloneButton = 0x24,
    ToggleWall = 0x25,
    ToggleFloor = 0x26,
    TrapButton = 0x27,
    TankButton = 0x28,
    Teleport = 0x29,
    Bomb = 0x2A,
    Trap = 0x2B,
    InvWallApp = 0x2C,
    Gravel = 0x2D,
    PopUpWall = 0x2E,
    Hint = 0x2F,
    PanelSE = 0x30,
    Cloner = 0x31,
    ForceRandom = 0x32,
    DrownChip = 0x33,
    BurnedChip0 = 0x34,
    BurnedChip1 = 0x35,
    NotUsed1 = 0x36,
    NotUsed2 = 0x37,
    NotUsed3 = 0x38,
    ChipExit = 0x39,
    UnusedExit0 = 0x3A,
    UnusedExit1 = 0x3B,
    ChipSwimmingN = 0x3C,
    ChipSwimmingW = 0x3D,
    ChipSwimmingS = 0x3E,
    ChipSwimmingE = 0x3F,
    AntN = 0x40,
    AntW = 0x41,
    AntS = 0x42,
    AntE = 0x43,
    FireballN = 0x44,
    FireballW = 0x45,
    FireballS = 0x46,
    FireballE = 0x47,
    BallN = 0x48,
    BallW = 0x49,
    BallS = 0x4A,
    BallE = 0x4B,
    TankN = 0x4C,
    TankW = 0x4D,
    TankS = 0x4E,
    TankE = 0x4F,
    GliderN = 0x50,
    GliderW = 0x51,
    GliderS = 0x52,
    GliderE = 0x53,
    TeethN = 0x54,
    TeethW = 0x55,
    TeethS = 0x56,
    TeethE = 0x57,
    WalkerN = 0x58,
    WalkerW = 0x59,
    WalkerS = 0x5A,
    WalkerE = 0x5B,
    BlobN = 0x5C,
    BlobW = 0x5D,
    BlobS = 0x5E,
    BlobE = 0x5F,
    ParameciumN = 0x60,
    ParameciumW = 0x61,
    ParameciumS = 0x62,
    ParameciumE = 0x63,
    BlueKey = 0x64,
    RedKey = 0x65,
    GreenKey = 0x66,
    YellowKey = 0x67,
    Flippers = 0x68,
    FireBoots = 0x69,
    Skates = 0x6A,
    SuctionBoots = 0x6B,
    PlayerN = 0x6C,
    PlayerW = 0x6D,
    PlayerS = 0x6E,
    PlayerE = 0x6F,
}

/// Every tile code in ascending order; index == on-disk byte.
const ALL: [Tile; 112] = {
    use Tile::*;
    [
        Floor, Wall, Chip, Water, Fire, InvWallPerm, PanelN, PanelW, PanelS, PanelE, Block, Dirt,
        Ice, ForceS, CloneBlockN, CloneBlockW, CloneBlockS, CloneBlockE, ForceN, ForceE, ForceW,
        Exit, BlueDoor, RedDoor, GreenDoor, YellowDoor, IceSE, IceSW, IceNW, IceNE, BlueWallFake,
        BlueWallReal, NotUsed0, Thief, Socket, GreenButton, CloneButton, ToggleWall, ToggleFloor,
        TrapButton, TankButton, Teleport, Bomb, Trap, InvWallApp, Gravel, PopUpWall, Hint, PanelSE,
        Cloner, ForceRandom, DrownChip, BurnedChip0, BurnedChip1, NotUsed1, NotUsed2, NotUsed3,
        ChipExit, UnusedExit0, UnusedExit1, ChipSwimmingN, ChipSwimmingW, ChipSwimmingS,
        ChipSwimmingE, AntN, AntW, AntS, AntE, FireballN, FireballW, FireballS, FireballE, BallN,
        BallW, BallS, BallE, TankN, TankW, TankS, TankE, GliderN, GliderW, GliderS, GliderE,
        TeethN, TeethW, TeethS, TeethE, WalkerN, WalkerW, WalkerS, WalkerE, BlobN, BlobW, BlobS,
        BlobE, ParameciumN, ParameciumW, ParameciumS, ParameciumE, BlueKey, RedKey, GreenKey,
        YellowKey, Flippers, FireBoots, Skates, SuctionBoots, PlayerN, PlayerW, PlayerS, PlayerE,
    ]
};

/// Families whose members carry a single compass direction, stored in
/// N, E, S, W order. `right()` walks each row clockwise.
///
/// The SE panel and the random force floor are deliberately absent: the
/// historical engine treats both as rotationally fixed.
const COMPASS_FAMILIES: [[Tile; 4]; 14] = {
    use Tile::*;
    [
        [PanelN, PanelE, PanelS, PanelW],
        [CloneBlockN, CloneBlockE, CloneBlockS, CloneBlockW],
        [ForceN, ForceE, ForceS, ForceW],
        [ChipSwimmingN, ChipSwimmingE, ChipSwimmingS, ChipSwimmingW],
        [AntN, AntE, AntS, AntW],
        [FireballN, FireballE, FireballS, FireballW],
        [BallN, BallE, BallS, BallW],
        [TankN, TankE, TankS, TankW],
        [GliderN, GliderE, GliderS, GliderW],
        [TeethN, TeethE, TeethS, TeethW],
        [WalkerN, WalkerE, WalkerS, WalkerW],
        [BlobN, BlobE, BlobS, BlobW],
        [ParameciumN, ParameciumE, ParameciumS, ParameciumW],
        [PlayerN, PlayerE, PlayerS, PlayerW],
    ]
};

const COMPASS_LABELS: [&str; 4] = ["N", "E", "S", "W"];

/// Corner families, stored clockwise: NE, SE, SW, NW.
const CORNER_FAMILIES: [[Tile; 4]; 1] = {
    use Tile::*;
    [[IceNE, IceSE, IceSW, IceNW]]
};

const CORNER_LABELS: [&str; 4] = ["NE", "SE", "SW", "NW"];

fn compass_slot(tile: Tile) -> Option<(usize, usize)> {
    for (row, family) in COMPASS_FAMILIES.iter().enumerate() {
        if let Some(col) = family.iter().position(|&t| t == tile) {
            return Some((row, col));
        }
    }
    None
}

fn corner_slot(tile: Tile) -> Option<(usize, usize)> {
    for (row, family) in CORNER_FAMILIES.iter().enumerate() {
        if let Some(col) = family.iter().position(|&t| t == tile) {
            return Some((row, col));
        }
    }
    None
}

impl Tile {
    /// On-disk byte for the DAT map layers.
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Inverse of `code()`. Returns `None` for bytes above 0x6F.
    #[inline]
    pub fn from_code(code: u8) -> Option<Self> {
        ALL.get(code as usize).copied()
    }

    /// Every tile code, ascending.
    pub fn all() -> &'static [Tile] {
        &ALL
    }

    // -------------------------------------------------------------------------
    // Direction helpers
    // -------------------------------------------------------------------------

    /// The compass suffix of this tile: `"N"`, `"SE"`, ... or `""` for
    /// directionless tiles.
    pub fn dirs(self) -> &'static str {
        if self == Tile::PanelSE {
            return "SE";
        }
        if let Some((_, col)) = compass_slot(self) {
            return COMPASS_LABELS[col];
        }
        if let Some((_, col)) = corner_slot(self) {
            return CORNER_LABELS[col];
        }
        ""
    }

    /// The sibling of this tile with direction `dirs`, when its family
    /// has one; the tile itself otherwise.
    pub fn with_dirs(self, dirs: &str) -> Tile {
        if let Some((row, _)) = compass_slot(self) {
            if let Some(col) = COMPASS_LABELS.iter().position(|&l| l == dirs) {
                return COMPASS_FAMILIES[row][col];
            }
        }
        if let Some((row, _)) = corner_slot(self) {
            if let Some(col) = CORNER_LABELS.iter().position(|&l| l == dirs) {
                return CORNER_FAMILIES[row][col];
            }
        }
        self
    }

    /// Rotate this tile's direction 90 degrees clockwise. Identity for
    /// tiles outside the rotatable families.
    pub fn right(self) -> Tile {
        if let Some((row, col)) = compass_slot(self) {
            return COMPASS_FAMILIES[row][(col + 1) % 4];
        }
        if let Some((row, col)) = corner_slot(self) {
            return CORNER_FAMILIES[row][(col + 1) % 4];
        }
        self
    }

    /// 180-degree turn: two rights.
    pub fn reverse(self) -> Tile {
        self.right().right()
    }

    /// Rotate 90 degrees counterclockwise: three rights.
    pub fn left(self) -> Tile {
        self.right().right().right()
    }

    /// Mirror across the vertical axis: E <-> W, NE <-> NW, SE <-> SW.
    pub fn flip_horizontal(self) -> Tile {
        let flipped = match self.dirs() {
            "E" => "W",
            "W" => "E",
            "NE" => "NW",
            "NW" => "NE",
            "SE" => "SW",
            "SW" => "SE",
            other => other,
        };
        self.with_dirs(flipped)
    }

    /// Mirror across the horizontal axis: N <-> S, NE <-> SE, NW <-> SW.
    pub fn flip_vertical(self) -> Tile {
        let flipped = match self.dirs() {
            "N" => "S",
            "S" => "N",
            "NE" => "SE",
            "SE" => "NE",
            "NW" => "SW",
            "SW" => "NW",
            other => other,
        };
        self.with_dirs(flipped)
    }

    /// Mirror across the NE/SW diagonal: N <-> E, S <-> W, SE <-> SW.
    pub fn flip_ne_sw(self) -> Tile {
        let flipped = match self.dirs() {
            "N" => "E",
            "E" => "N",
            "S" => "W",
            "W" => "S",
            "SE" => "SW",
            "SW" => "SE",
            other => other,
        };
        self.with_dirs(flipped)
    }

    /// Mirror across the NW/SE diagonal: N <-> W, S <-> E, NE <-> NW.
    pub fn flip_nw_se(self) -> Tile {
        let flipped = match self.dirs() {
            "N" => "W",
            "W" => "N",
            "S" => "E",
            "E" => "S",
            "NE" => "NW",
            "NW" => "NE",
            other => other,
        };
        self.with_dirs(flipped)
    }

    // -------------------------------------------------------------------------
    // Membership predicates (driven by the code layout)
    // -------------------------------------------------------------------------

    /// Codes the original engine never produces in a well-formed level.
    #[inline]
    pub fn is_invalid(self) -> bool {
        matches!(self.code(), 0x20 | 0x33..=0x3F)
    }

    #[inline]
    pub fn is_monster(self) -> bool {
        matches!(self.code(), 0x40..=0x63)
    }

    #[inline]
    pub fn is_clone_block(self) -> bool {
        matches!(self.code(), 0x0E..=0x11)
    }

    #[inline]
    pub fn is_block(self) -> bool {
        self == Tile::Block || self.is_clone_block()
    }

    #[inline]
    pub fn is_player(self) -> bool {
        matches!(self.code(), 0x6C..=0x6F)
    }

    /// Monster, block, or player.
    #[inline]
    pub fn is_mob(self) -> bool {
        self.is_monster() || self.is_block() || self.is_player()
    }

    #[inline]
    pub fn is_ice(self) -> bool {
        matches!(self.code(), 0x0C | 0x1A..=0x1D)
    }

    #[inline]
    pub fn is_force(self) -> bool {
        matches!(self.code(), 0x0D | 0x12..=0x14 | 0x32)
    }

    #[inline]
    pub fn is_wall(self) -> bool {
        matches!(
            self,
            Tile::Wall | Tile::InvWallPerm | Tile::InvWallApp | Tile::BlueWallReal
        )
    }

    #[inline]
    pub fn is_panel(self) -> bool {
        matches!(self.code(), 0x06..=0x09 | 0x30)
    }

    #[inline]
    pub fn is_door(self) -> bool {
        matches!(self.code(), 0x16..=0x19)
    }

    #[inline]
    pub fn is_key(self) -> bool {
        matches!(self.code(), 0x64..=0x67)
    }

    #[inline]
    pub fn is_boot(self) -> bool {
        matches!(self.code(), 0x68..=0x6B)
    }

    /// Boot, key, or chip.
    #[inline]
    pub fn is_pickup(self) -> bool {
        self.is_boot() || self.is_key() || self == Tile::Chip
    }

    #[inline]
    pub fn is_button(self) -> bool {
        matches!(
            self,
            Tile::GreenButton | Tile::CloneButton | Tile::TrapButton | Tile::TankButton
        )
    }

    #[inline]
    pub fn is_toggle(self) -> bool {
        matches!(self, Tile::ToggleWall | Tile::ToggleFloor)
    }
}

// -------------------------------------------------------------------------
// Materialized membership sets
// -------------------------------------------------------------------------

macro_rules! tile_set {
    ($name:ident, $doc:literal, [$($tile:ident),* $(,)?]) => {
        #[doc = $doc]
        pub fn $name() -> &'static [Tile] {
            const SET: &[Tile] = &[$(Tile::$tile),*];
            SET
        }
    };
}

tile_set!(invalid, "Codes rejected by `Cell::is_valid`.", [
    NotUsed0, DrownChip, BurnedChip0, BurnedChip1, NotUsed1, NotUsed2, NotUsed3, ChipExit,
    UnusedExit0, UnusedExit1, ChipSwimmingN, ChipSwimmingW, ChipSwimmingS, ChipSwimmingE,
]);

tile_set!(ice, "Ice and ice-corner tiles.", [Ice, IceNE, IceNW, IceSE, IceSW]);

tile_set!(forces, "Force floors, including the random one.", [
    ForceN, ForceE, ForceS, ForceW, ForceRandom,
]);

tile_set!(walls, "Full-square wall tiles.", [Wall, InvWallPerm, InvWallApp, BlueWallReal]);

tile_set!(panels, "Thin-wall panels, including the SE corner panel.", [
    PanelN, PanelE, PanelS, PanelW, PanelSE,
]);

tile_set!(clone_blocks, "Clone-machine block tiles.", [
    CloneBlockN, CloneBlockE, CloneBlockS, CloneBlockW,
]);

tile_set!(blocks, "Pushable and clone blocks.", [
    Block, CloneBlockN, CloneBlockE, CloneBlockS, CloneBlockW,
]);

tile_set!(players, "Player start tiles.", [PlayerN, PlayerE, PlayerS, PlayerW]);

tile_set!(ants, "Ant (spider) tiles.", [AntN, AntE, AntS, AntW]);

tile_set!(paramecia, "Paramecium tiles.", [ParameciumN, ParameciumE, ParameciumS, ParameciumW]);

tile_set!(gliders, "Glider tiles.", [GliderN, GliderE, GliderS, GliderW]);

tile_set!(fireballs, "Fireball tiles.", [FireballN, FireballE, FireballS, FireballW]);

tile_set!(tanks, "Tank tiles.", [TankN, TankE, TankS, TankW]);

tile_set!(balls, "Bouncing-ball tiles.", [BallN, BallE, BallS, BallW]);

tile_set!(walkers, "Walker tiles.", [WalkerN, WalkerE, WalkerS, WalkerW]);

tile_set!(teeth, "Teeth tiles.", [TeethN, TeethE, TeethS, TeethW]);

tile_set!(blobs, "Blob tiles.", [BlobN, BlobE, BlobS, BlobW]);

tile_set!(monsters, "All nine monster species, four directions each.", [
    AntN, AntW, AntS, AntE, FireballN, FireballW, FireballS, FireballE, BallN, BallW, BallS,
    BallE, TankN, TankW, TankS, TankE, GliderN, GliderW, GliderS, GliderE, TeethN, TeethW,
    TeethS, TeethE, WalkerN, WalkerW, WalkerS, WalkerE, BlobN, BlobW, BlobS, BlobE, ParameciumN,
    ParameciumW, ParameciumS, ParameciumE,
]);

tile_set!(mobs, "Monsters, blocks, and players.", [
    AntN, AntW, AntS, AntE, FireballN, FireballW, FireballS, FireballE, BallN, BallW, BallS,
    BallE, TankN, TankW, TankS, TankE, GliderN, GliderW, GliderS, GliderE, TeethN, TeethW,
    TeethS, TeethE, WalkerN, WalkerW, WalkerS, WalkerE, BlobN, BlobW, BlobS, BlobE, ParameciumN,
    ParameciumW, ParameciumS, ParameciumE, Block, CloneBlockN, CloneBlockW, CloneBlockS,
    CloneBlockE, PlayerN, PlayerW, PlayerS, PlayerE,
]);

tile_set!(doors, "Colored doors.", [BlueDoor, RedDoor, GreenDoor, YellowDoor]);

tile_set!(keys, "Colored keys.", [BlueKey, RedKey, GreenKey, YellowKey]);

tile_set!(boots, "Boot pickups.", [Flippers, FireBoots, Skates, SuctionBoots]);

tile_set!(pickups, "Boots, keys, and the chip.", [
    Flippers, FireBoots, Skates, SuctionBoots, BlueKey, RedKey, GreenKey, YellowKey, Chip,
]);

tile_set!(buttons, "Button tiles.", [GreenButton, CloneButton, TrapButton, TankButton]);

tile_set!(toggles, "Toggle wall/floor pair.", [ToggleWall, ToggleFloor]);
