//! Interaction mode state machine

use crate::core::error::Error;
use crate::core::types::Result;

/// Exclusive interaction mode.
///
/// The mode gates which pointer action the sculptor dispatches; it has
/// no effect on mesh validity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Idle,
    Sculpting,
    Painting,
}

impl Mode {
    pub fn is_sculpting(&self) -> bool {
        *self == Mode::Sculpting
    }

    pub fn is_painting(&self) -> bool {
        *self == Mode::Painting
    }

    /// Idle -> Sculpting. Fails, without changing state, from any other
    /// mode; the message is suitable for direct display.
    pub fn begin_sculpting(&mut self) -> Result<()> {
        match self {
            Mode::Sculpting => Err(Error::Mode(
                "couldn't begin sculpting: already sculpting".into(),
            )),
            Mode::Painting => Err(Error::Mode(
                "couldn't begin sculpting: painting in progress".into(),
            )),
            Mode::Idle => {
                *self = Mode::Sculpting;
                Ok(())
            }
        }
    }

    /// Sculpting -> Idle
    pub fn end_sculpting(&mut self) -> Result<()> {
        if !self.is_sculpting() {
            return Err(Error::Mode("couldn't end sculpting: not sculpting".into()));
        }
        *self = Mode::Idle;
        Ok(())
    }

    /// Idle -> Painting
    pub fn begin_painting(&mut self) -> Result<()> {
        match self {
            Mode::Painting => Err(Error::Mode(
                "couldn't begin painting: already painting".into(),
            )),
            Mode::Sculpting => Err(Error::Mode(
                "couldn't begin painting: sculpting in progress".into(),
            )),
            Mode::Idle => {
                *self = Mode::Painting;
                Ok(())
            }
        }
    }

    /// Painting -> Idle
    pub fn end_painting(&mut self) -> Result<()> {
        if !self.is_painting() {
            return Err(Error::Mode("couldn't end painting: not painting".into()));
        }
        *self = Mode::Idle;
        Ok(())
    }
}
