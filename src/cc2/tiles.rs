// src/cc2/tiles.rs
#![forbid(unsafe_code)]

/// CC2 tile opcodes, 0x01..=0x92, as they appear in the map stream.
///
/// Unused slots are representable so a damaged stream can still be
/// walked; they never classify into a layer family and land on the
/// terrain layer like any other opaque terrain.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TileId {
    Floor = 0x01,
    Wall = 0x02,
    Ice = 0x03,
    IceSW = 0x04,
    IceNW = 0x05,
    IceNE = 0x06,
    IceSE = 0x07,
    Water = 0x08,
    Fire = 0x09,
    ForceN = 0x0A,
    ForceE = 0x0B,
    ForceS = 0x0C,
    ForceW = 0x0D,
    GreenToggleWall = 0x0E,
    GreenToggleFloor = 0x0F,
    RedTeleport = 0x10,
    BlueTeleport = 0x11,
    YellowTeleport = 0x12,
    GreenTeleport = 0x13,
    Exit = 0x14,
    Slime = 0x15,
    Chip = 0x16,
    DirtBlock = 0x17,
    Walker = 0x18,
    Glider = 0x19,
    IceBlock = 0x1A,
    ThinWallS = 0x1B,
    ThinWallE = 0x1C,
    ThinWallSE = 0x1D,
    Gravel = 0x1E,
    GreenButton = 0x1F,
    BlueButton = 0x20,
    BlueTank = 0x21,
    RedDoor = 0x22,
    BlueDoor = 0x23,
    YellowDoor = 0x24,
    GreenDoor = 0x25,
    RedKey = 0x26,
    BlueKey = 0x27,
    YellowKey = 0x28,
    GreenKey = 0x29,
    IcChip = 0x2A,
    ExtraIcChip = 0x2B,
    ChipSocket = 0x2C,
    PopupWall = 0x2D,
    AppearingWall = 0x2E,
    InvisibleWall = 0x2F,
    SolidBlueWall = 0x30,
    FalseBlueWall = 0x31,
    Dirt = 0x32,
    Ant = 0x33,
    Centipede = 0x34,
    Ball = 0x35,
    Blob = 0x36,
    RedTeeth = 0x37,
    Fireball = 0x38,
    RedButton = 0x39,
    BrownButton = 0x3A,
    Cleats = 0x3B,
    SuctionBoots = 0x3C,
    FireBoots = 0x3D,
    Flippers = 0x3E,
    ToolThief = 0x3F,
    Bomb = 0x40,
    OpenTrap = 0x41,
    Trap = 0x42,
    CloneMachineOld = 0x43,
    CloneMachine = 0x44,
    Clue = 0x45,
    ForceRandom = 0x46,
    GrayButton = 0x47,
    SwivelDoorSW = 0x48,
    SwivelDoorNW = 0x49,
    SwivelDoorNE = 0x4A,
    SwivelDoorSE = 0x4B,
    TimeBonus = 0x4C,
    Stopwatch = 0x4D,
    Transmogrifier = 0x4E,
    RailroadTrack = 0x4F,
    SteelWall = 0x50,
    Tnt = 0x51,
    Helmet = 0x52,
    Unused53 = 0x53,
    Unused54 = 0x54,
    Unused55 = 0x55,
    Melinda = 0x56,
    BlueTeeth = 0x57,
    ExplosionAnimation = 0x58,
    HikingBoots = 0x59,
    MaleOnlySign = 0x5A,
    FemaleOnlySign = 0x5B,
    LogicGate = 0x5C,
    Unused5D = 0x5D,
    PinkButton = 0x5E,
    FlameJetOff = 0x5F,
    FlameJetOn = 0x60,
    OrangeButton = 0x61,
    LightningBolt = 0x62,
    YellowTank = 0x63,
    YellowTankButton = 0x64,
    MirrorChip = 0x65,
    MirrorMelinda = 0x66,
    Unused67 = 0x67,
    BowlingBall = 0x68,
    Rover = 0x69,
    TimePenalty = 0x6A,
    CustomFloor = 0x6B,
    Unused6C = 0x6C,
    ThinWallCanopy = 0x6D,
    Unused6E = 0x6E,
    RailroadSign = 0x6F,
    CustomWall = 0x70,
    LetterTileSpace = 0x71,
    PurpleToggleFloor = 0x72,
    PurpleToggleWall = 0x73,
    Unused74 = 0x74,
    Unused75 = 0x75,
    Modifier8Bit = 0x76,
    Modifier16Bit = 0x77,
    Modifier32Bit = 0x78,
    Unused79 = 0x79,
    Flag10 = 0x7A,
    Flag100 = 0x7B,
    Flag1000 = 0x7C,
    SolidGreenWall = 0x7D,
    FalseGreenWall = 0x7E,
    NotAllowedMarker = 0x7F,
    Flag2x = 0x80,
    DirectionalBlock = 0x81,
    FloorMimic = 0x82,
    GreenBomb = 0x83,
    GreenChip = 0x84,
    Unused85 = 0x85,
    Unused86 = 0x86,
    BlackButton = 0x87,
    SwitchOff = 0x88,
    SwitchOn = 0x89,
    KeyThief = 0x8A,
    Ghost = 0x8B,
    SteelFoil = 0x8C,
    Turtle = 0x8D,
    SecretEye = 0x8E,
    Bribe = 0x8F,
    SpeedBoots = 0x90,
    Unused91 = 0x91,
    Hook = 0x92,
}

const ALL: [TileId; 146] = {
    use TileId::*;
    [
        Floor, Wall, Ice, IceSW, IceNW, IceNE, IceSE, Water, Fire, ForceN, ForceE, ForceS, ForceW,
        GreenToggleWall, GreenToggleFloor, RedTeleport, BlueTeleport, YellowTeleport,
        GreenTeleport, Exit, Slime, Chip, DirtBlock, Walker, Glider, IceBlock, ThinWallS,
        ThinWallE, ThinWallSE, Gravel, GreenButton, BlueButton, BlueTank, RedDoor, BlueDoor,
        YellowDoor, GreenDoor, RedKey, BlueKey, YellowKey, GreenKey, IcChip, ExtraIcChip,
        ChipSocket, PopupWall, AppearingWall, InvisibleWall, SolidBlueWall, FalseBlueWall, Dirt,
        Ant, Centipede, Ball, Blob, RedTeeth, Fireball, RedButton, BrownButton, Cleats,
        SuctionBoots, FireBoots, Flippers, ToolThief, Bomb, OpenTrap, Trap, CloneMachineOld,
        CloneMachine, Clue, ForceRandom, GrayButton, SwivelDoorSW, SwivelDoorNW, SwivelDoorNE,
        SwivelDoorSE, TimeBonus, Stopwatch, Transmogrifier, RailroadTrack, SteelWall, Tnt, Helmet,
        Unused53, Unused54, Unused55, Melinda, BlueTeeth, ExplosionAnimation, HikingBoots,
        MaleOnlySign, FemaleOnlySign, LogicGate, Unused5D, PinkButton, FlameJetOff, FlameJetOn,
        OrangeButton, LightningBolt, YellowTank, YellowTankButton, MirrorChip, MirrorMelinda,
        Unused67, BowlingBall, Rover, TimePenalty, CustomFloor, Unused6C, ThinWallCanopy,
        Unused6E, RailroadSign, CustomWall, LetterTileSpace, PurpleToggleFloor, PurpleToggleWall,
        Unused74, Unused75, Modifier8Bit, Modifier16Bit, Modifier32Bit, Unused79, Flag10, Flag100,
        Flag1000, SolidGreenWall, FalseGreenWall, NotAllowedMarker, Flag2x, DirectionalBlock,
        FloorMimic, GreenBomb, GreenChip, Unused85, Unused86, BlackButton, SwitchOff, SwitchOn,
        KeyThief, Ghost, SteelFoil, Turtle, SecretEye, Bribe, SpeedBoots, Unused91, Hook,
    ]
};

/// Families with hardcoded directions, each stored clockwise.
/// Plain `Ice` and `ForceRandom` are rotationally fixed and absent.
const COMPASS_FAMILIES: [[TileId; 4]; 1] = {
    use TileId::*;
    [[ForceN, ForceE, ForceS, ForceW]]
};

const CORNER_FAMILIES: [[TileId; 4]; 2] = {
    use TileId::*;
    [
        [IceNE, IceSE, IceSW, IceNW],
        [SwivelDoorNE, SwivelDoorSE, SwivelDoorSW, SwivelDoorNW],
    ]
};

const COMPASS_LABELS: [&str; 4] = ["N", "E", "S", "W"];
const CORNER_LABELS: [&str; 4] = ["NE", "SE", "SW", "NW"];

fn compass_slot(tile: TileId) -> Option<(usize, usize)> {
    for (row, family) in COMPASS_FAMILIES.iter().enumerate() {
        if let Some(col) = family.iter().position(|&t| t == tile) {
            return Some((row, col));
        }
    }
    None
}

fn corner_slot(tile: TileId) -> Option<(usize, usize)> {
    for (row, family) in CORNER_FAMILIES.iter().enumerate() {
        if let Some(col) = family.iter().position(|&t| t == tile) {
            return Some((row, col));
        }
    }
    None
}

impl TileId {
    /// On-disk opcode byte.
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Inverse of `code()`. Returns `None` for 0x00 and bytes past 0x92.
    #[inline]
    pub fn from_code(code: u8) -> Option<Self> {
        let index = (code as usize).checked_sub(1)?;
        ALL.get(index).copied()
    }

    /// Every opcode, ascending.
    pub fn all() -> &'static [TileId] {
        &ALL
    }

    // -------------------------------------------------------------------------
    // Direction and state helpers
    // -------------------------------------------------------------------------

    /// The compass suffix of this tile name, or `""`.
    pub fn dirs(self) -> &'static str {
        if let Some((_, col)) = compass_slot(self) {
            return COMPASS_LABELS[col];
        }
        if let Some((_, col)) = corner_slot(self) {
            return CORNER_LABELS[col];
        }
        match self {
            TileId::ThinWallS => "S",
            TileId::ThinWallE => "E",
            TileId::ThinWallSE => "SE",
            _ => "",
        }
    }

    /// The sibling with direction `dirs` when the family has one; the
    /// tile itself otherwise.
    pub fn with_dirs(self, dirs: &str) -> TileId {
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
        match (self, dirs) {
            (TileId::ThinWallS | TileId::ThinWallE, "S") => TileId::ThinWallS,
            (TileId::ThinWallS | TileId::ThinWallE, "E") => TileId::ThinWallE,
            _ => self,
        }
    }

    /// Rotate the hardcoded direction 90 degrees clockwise. Identity for
    /// everything outside the ice-corner, force-floor and swivel-door
    /// families.
    pub fn right(self) -> TileId {
        if let Some((row, col)) = compass_slot(self) {
            return COMPASS_FAMILIES[row][(col + 1) % 4];
        }
        if let Some((row, col)) = corner_slot(self) {
            return CORNER_FAMILIES[row][(col + 1) % 4];
        }
        self
    }

    pub fn reverse(self) -> TileId {
        self.right().right()
    }

    pub fn left(self) -> TileId {
        self.right().right().right()
    }

    /// The other half of a two-state pair (toggle walls, flame jets,
    /// switches, green chip/bomb); identity for unpaired tiles.
    pub fn toggle(self) -> TileId {
        match self {
            TileId::GreenChip => TileId::GreenBomb,
            TileId::GreenBomb => TileId::GreenChip,
            TileId::FlameJetOn => TileId::FlameJetOff,
            TileId::FlameJetOff => TileId::FlameJetOn,
            TileId::GreenToggleFloor => TileId::GreenToggleWall,
            TileId::GreenToggleWall => TileId::GreenToggleFloor,
            TileId::PurpleToggleFloor => TileId::PurpleToggleWall,
            TileId::PurpleToggleWall => TileId::PurpleToggleFloor,
            TileId::SwitchOn => TileId::SwitchOff,
            TileId::SwitchOff => TileId::SwitchOn,
            other => other,
        }
    }

    // -------------------------------------------------------------------------
    // Layer-family predicates (drive the map codec)
    // -------------------------------------------------------------------------

    #[inline]
    pub fn is_monster(self) -> bool {
        matches!(
            self,
            TileId::Glider
                | TileId::Fireball
                | TileId::Ant
                | TileId::Centipede
                | TileId::Walker
                | TileId::Ball
                | TileId::RedTeeth
                | TileId::Blob
                | TileId::BlueTank
                | TileId::YellowTank
                | TileId::BlueTeeth
                | TileId::FloorMimic
                | TileId::MirrorChip
                | TileId::MirrorMelinda
                | TileId::Rover
                | TileId::Ghost
        )
    }

    #[inline]
    pub fn is_block(self) -> bool {
        matches!(
            self,
            TileId::DirtBlock | TileId::IceBlock | TileId::DirectionalBlock
        )
    }

    #[inline]
    pub fn is_player(self) -> bool {
        matches!(self, TileId::Chip | TileId::Melinda)
    }

    /// Monster, block, or player.
    #[inline]
    pub fn is_mob(self) -> bool {
        self.is_monster() || self.is_block() || self.is_player()
    }

    /// Opcodes that expect a direction byte despite not being usable
    /// mobs.
    #[inline]
    pub fn is_invalid_mob(self) -> bool {
        matches!(self, TileId::ExplosionAnimation | TileId::Unused79)
    }

    /// Everything the decoder must read a direction byte for.
    #[inline]
    pub fn is_any_mob(self) -> bool {
        self.is_mob() || self.is_invalid_mob()
    }

    /// Thin walls and the canopy: the panel layer.
    #[inline]
    pub fn is_panel(self) -> bool {
        matches!(
            self,
            TileId::ThinWallS | TileId::ThinWallE | TileId::ThinWallSE | TileId::ThinWallCanopy
        )
    }

    #[inline]
    pub fn is_key(self) -> bool {
        matches!(
            self,
            TileId::RedKey | TileId::BlueKey | TileId::YellowKey | TileId::GreenKey
        )
    }

    #[inline]
    pub fn is_tool(self) -> bool {
        matches!(
            self,
            TileId::Flippers
                | TileId::Cleats
                | TileId::FireBoots
                | TileId::SuctionBoots
                | TileId::Tnt
                | TileId::BowlingBall
                | TileId::SecretEye
                | TileId::Bribe
                | TileId::SpeedBoots
                | TileId::RailroadSign
                | TileId::HikingBoots
                | TileId::Helmet
                | TileId::Hook
                | TileId::SteelFoil
                | TileId::LightningBolt
        )
    }

    #[inline]
    pub fn is_flag(self) -> bool {
        matches!(
            self,
            TileId::Flag10 | TileId::Flag100 | TileId::Flag1000 | TileId::Flag2x
        )
    }

    #[inline]
    pub fn is_time_pickup(self) -> bool {
        matches!(
            self,
            TileId::TimeBonus | TileId::TimePenalty | TileId::Stopwatch
        )
    }

    #[inline]
    pub fn is_bomb(self) -> bool {
        matches!(self, TileId::Bomb | TileId::GreenBomb)
    }

    /// Keys, tools, flags, time pickups, and bombs: the pickup layer.
    #[inline]
    pub fn is_pickup(self) -> bool {
        self.is_key() || self.is_tool() || self.is_flag() || self.is_time_pickup() || self.is_bomb()
    }

    // -------------------------------------------------------------------------
    // Modifier-family predicates (drive the modifier codec)
    // -------------------------------------------------------------------------

    /// The three modifier-prefix opcodes.
    #[inline]
    pub fn is_modifier(self) -> bool {
        matches!(
            self,
            TileId::Modifier8Bit | TileId::Modifier16Bit | TileId::Modifier32Bit
        )
    }

    /// Tiles whose modifier byte is a wire/wire-tunnel bitmask.
    #[inline]
    pub fn is_wired(self) -> bool {
        matches!(
            self,
            TileId::Floor | TileId::SteelWall | TileId::SwitchOff | TileId::SwitchOn
        )
    }

    /// The two editor-colored tiles.
    #[inline]
    pub fn is_custom_tile(self) -> bool {
        matches!(self, TileId::CustomFloor | TileId::CustomWall)
    }

    /// Tiles a modifier prefix may precede.
    #[inline]
    pub fn is_modified_tile(self) -> bool {
        self.is_wired()
            || self.is_custom_tile()
            || matches!(
                self,
                TileId::LetterTileSpace
                    | TileId::CloneMachine
                    | TileId::LogicGate
                    | TileId::RailroadTrack
            )
    }

    // -------------------------------------------------------------------------
    // General membership predicates
    // -------------------------------------------------------------------------

    #[inline]
    pub fn is_wall(self) -> bool {
        matches!(
            self,
            TileId::Wall
                | TileId::SteelWall
                | TileId::SolidGreenWall
                | TileId::SolidBlueWall
                | TileId::InvisibleWall
                | TileId::AppearingWall
        )
    }

    #[inline]
    pub fn is_door(self) -> bool {
        matches!(
            self,
            TileId::RedDoor | TileId::BlueDoor | TileId::YellowDoor | TileId::GreenDoor
        )
    }

    #[inline]
    pub fn is_button(self) -> bool {
        matches!(
            self,
            TileId::RedButton
                | TileId::GreenButton
                | TileId::BlueButton
                | TileId::BrownButton
                | TileId::GrayButton
                | TileId::PinkButton
                | TileId::BlackButton
                | TileId::OrangeButton
                | TileId::YellowTankButton
        )
    }

    #[inline]
    pub fn is_switch(self) -> bool {
        matches!(self, TileId::SwitchOn | TileId::SwitchOff)
    }

    #[inline]
    pub fn is_teleport(self) -> bool {
        matches!(
            self,
            TileId::RedTeleport
                | TileId::BlueTeleport
                | TileId::YellowTeleport
                | TileId::GreenTeleport
        )
    }

    #[inline]
    pub fn is_thief(self) -> bool {
        matches!(self, TileId::KeyThief | TileId::ToolThief)
    }

    #[inline]
    pub fn is_ice(self) -> bool {
        matches!(
            self,
            TileId::Ice | TileId::IceNE | TileId::IceNW | TileId::IceSE | TileId::IceSW
        )
    }

    #[inline]
    pub fn is_force(self) -> bool {
        matches!(
            self,
            TileId::ForceN
                | TileId::ForceE
                | TileId::ForceS
                | TileId::ForceW
                | TileId::ForceRandom
        )
    }

    #[inline]
    pub fn is_swivel(self) -> bool {
        matches!(
            self,
            TileId::SwivelDoorNE | TileId::SwivelDoorNW | TileId::SwivelDoorSE | TileId::SwivelDoorSW
        )
    }

    #[inline]
    pub fn is_unused(self) -> bool {
        matches!(
            self,
            TileId::Unused53
                | TileId::Unused54
                | TileId::Unused55
                | TileId::Unused5D
                | TileId::Unused67
                | TileId::Unused6C
                | TileId::Unused6E
                | TileId::Unused74
                | TileId::Unused75
                | TileId::Unused79
                | TileId::Unused85
                | TileId::Unused86
                | TileId::Unused91
        )
    }
}
