/// Positions where each four-digit group starts, lowest first.
pub const GROUP_BOUNDARIES: [usize; 19] = [
    1, 5, 9, 13, 17, 21, 25, 29, 33, 37, 41, 45, 49, 53, 57, 61, 65, 69, 73,
];

/// Large-group unit for each boundary index. Index 0 is the ones group.
const GROUP_UNITS: [Option<&str>; 19] = [
    None,
    Some("萬"),
    Some("億"),
    Some("兆"),
    Some("京"),
    Some("垓"),
    Some("秭"),
    Some("穰"),
    Some("溝"),
    Some("澗"),
    Some("正"),
    Some("載"),
    Some("極"),
    Some("恆河沙"),
    Some("阿僧祇"),
    Some("那由他"),
    Some("不可思議"),
    Some("無量"),
    Some("大數"),
];

/// Where a digit sits inside its four-digit group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Place {
    /// The group boundary; closes the group with its large unit.
    Ones,
    Ten,
    Hundred,
    Thousand,
}

impl Place {
    fn from_offset(offset: usize) -> Self {
        match offset {
            0 => Place::Ones,
            1 => Place::Ten,
            2 => Place::Hundred,
            _ => Place::Thousand,
        }
    }

    /// Within-group unit written after a non-zero digit.
    pub fn glyph(self) -> Option<&'static str> {
        match self {
            Place::Ones => None,
            Place::Ten => Some("十"),
            Place::Hundred => Some("百"),
            Place::Thousand => Some("千"),
        }
    }
}

/// A position resolved against the unit table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub group: usize,
    pub place: Place,
}

/// Largest table index whose boundary is at or below `position`.
///
/// Positions below 1 resolve to the ones group.
pub fn boundary_index(position: usize) -> usize {
    GROUP_BOUNDARIES
        .iter()
        .rposition(|&boundary| boundary <= position)
        .unwrap_or(0)
}

pub fn group_unit(index: usize) -> Option<&'static str> {
    GROUP_UNITS.get(index).copied().flatten()
}

pub fn locate(position: usize) -> Slot {
    let group = boundary_index(position);
    let offset = position.saturating_sub(GROUP_BOUNDARIES[group]);
    Slot {
        group,
        place: Place::from_offset(offset),
    }
}
