use core::fmt;
use std::fmt::Display;

use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter, EnumString};

#[derive(
    Clone, Copy, Debug, Display, EnumString, EnumCountMacro, EnumIter, PartialEq, Eq, Hash,
)]
#[strum(ascii_case_insensitive)]
pub enum CardColor {
    Red,
    Green,
    Blue,
    Yellow,
}

#[derive(Clone, Copy, Debug, Display, EnumCountMacro, EnumIter, PartialEq, Eq, Hash)]
pub enum Action {
    Skip,
    Reverse,
    #[strum(serialize = "Draw Two")]
    DrawTwo,
}

#[derive(Clone, Copy, Debug, Display, EnumCountMacro, EnumIter, PartialEq, Eq, Hash)]
pub enum WildAction {
    Wild,
    #[strum(serialize = "Wild Draw Four")]
    WildDrawFour,
}

/// A single UNO card. Only number and action cards carry a color of their own,
/// wild cards get theirs from whoever plays them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Card {
    Number(CardColor, u8),
    Action(CardColor, Action),
    Wild(WildAction),
}

impl Card {
    pub fn color(&self) -> Option<CardColor> {
        match self {
            Card::Number(color, _) | Card::Action(color, _) => Some(*color),
            Card::Wild(_) => None,
        }
    }

    pub fn is_wild(&self) -> bool {
        matches!(self, Card::Wild(_))
    }

    pub fn is_action(&self) -> bool {
        matches!(self, Card::Action(_, _))
    }

    pub fn is_wild_draw_four(&self) -> bool {
        matches!(self, Card::Wild(WildAction::WildDrawFour))
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Number(color, number) => write!(f, "{color} {number}"),
            Card::Action(color, action) => write!(f, "{color} {action}"),
            Card::Wild(action) => write!(f, "{action}"),
        }
    }
}
