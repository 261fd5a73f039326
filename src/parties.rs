use serde::{Deserialize, Serialize};

/// The two ideological groupings every party belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bloc {
    #[serde(rename = "left")]
    Left,
    #[serde(rename = "right")]
    Right,
}

impl Bloc {
    pub fn label(self) -> &'static str {
        match self {
            Bloc::Left => "Esquerda",
            Bloc::Right => "Direita",
        }
    }
}

/// The parties with parliamentary representation. Closed set: the share
/// codec assigns each variant a single wire character, so new parties
/// need a new code here before they can travel in a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Party {
    #[serde(rename = "PS")]
    Ps,
    #[serde(rename = "PSD")]
    Psd,
    #[serde(rename = "CH")]
    Ch,
    #[serde(rename = "IL")]
    Il,
    #[serde(rename = "CDS-PP")]
    CdsPp,
    #[serde(rename = "BE")]
    Be,
    #[serde(rename = "PCP")]
    Pcp,
    #[serde(rename = "L")]
    L,
    #[serde(rename = "PAN")]
    Pan,
    #[serde(rename = "JPP")]
    Jpp,
}

pub const ALL_PARTIES: [Party; 10] = [
    Party::Ps,
    Party::Psd,
    Party::Ch,
    Party::Il,
    Party::CdsPp,
    Party::Be,
    Party::Pcp,
    Party::L,
    Party::Pan,
    Party::Jpp,
];

/// Display order used by pickers and breakdown views.
pub const PARTY_ORDER: [Party; 10] = [
    Party::Ps,
    Party::Psd,
    Party::Ch,
    Party::Il,
    Party::Be,
    Party::Pcp,
    Party::L,
    Party::Pan,
    Party::CdsPp,
    Party::Jpp,
];

impl Party {
    pub fn bloc(self) -> Bloc {
        match self {
            Party::Ps | Party::Be | Party::Pcp | Party::L | Party::Pan | Party::Jpp => Bloc::Left,
            Party::Psd | Party::Ch | Party::Il | Party::CdsPp => Bloc::Right,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Party::Ps => "PS",
            Party::Psd => "PSD",
            Party::Ch => "CH",
            Party::Il => "IL",
            Party::CdsPp => "CDS-PP",
            Party::Be => "BE",
            Party::Pcp => "PCP",
            Party::L => "L",
            Party::Pan => "PAN",
            Party::Jpp => "JPP",
        }
    }

    pub fn full_name(self) -> &'static str {
        match self {
            Party::Ps => "Partido Socialista",
            Party::Psd => "Partido Social Democrata",
            Party::Ch => "Chega",
            Party::Il => "Iniciativa Liberal",
            Party::CdsPp => "CDS - Partido Popular",
            Party::Be => "Bloco de Esquerda",
            Party::Pcp => "Partido Comunista Portugues",
            Party::L => "Livre",
            Party::Pan => "Pessoas-Animais-Natureza",
            Party::Jpp => "Juntos Pelo Povo",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Party::Ps => "#D4338F",
            Party::Psd => "#FF9900",
            Party::Ch => "#1D1C59",
            Party::Il => "#00ADEF",
            Party::CdsPp => "#005C9E",
            Party::Be => "#E20613",
            Party::Pcp => "#B91C1C",
            Party::L => "#C3D500",
            Party::Pan => "#00667E",
            Party::Jpp => "#00AA85",
        }
    }

    pub fn logo(self) -> &'static str {
        match self {
            Party::Ps => "images/partidos/ps.svg",
            Party::Psd => "images/partidos/psd.svg",
            Party::Ch => "images/partidos/ch.webp",
            Party::Il => "images/partidos/il.png",
            Party::CdsPp => "images/partidos/cds.svg",
            Party::Be => "images/partidos/be.png",
            Party::Pcp => "images/partidos/pcp.svg",
            Party::L => "images/partidos/livre.png",
            Party::Pan => "images/partidos/pan.svg",
            Party::Jpp => "images/partidos/jpp.png",
        }
    }

    /// One-character code used in share tokens. Fixed bijection: these
    /// characters are part of the wire format and must never be reassigned.
    pub fn code(self) -> char {
        match self {
            Party::Ps => 'a',
            Party::Psd => 'b',
            Party::Ch => 'c',
            Party::Il => 'd',
            Party::CdsPp => 'e',
            Party::Be => 'f',
            Party::Pcp => 'g',
            Party::L => 'h',
            Party::Pan => 'i',
            Party::Jpp => 'j',
        }
    }

    pub fn from_code(code: char) -> Option<Party> {
        ALL_PARTIES.iter().copied().find(|party| party.code() == code)
    }
}

pub fn parties_of_bloc(bloc: Bloc) -> &'static [Party] {
    match bloc {
        Bloc::Left => &[
            Party::Ps,
            Party::Be,
            Party::Pcp,
            Party::L,
            Party::Pan,
            Party::Jpp,
        ],
        Bloc::Right => &[Party::Psd, Party::CdsPp, Party::Il, Party::Ch],
    }
}
