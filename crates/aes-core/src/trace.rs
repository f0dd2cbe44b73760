//! Round-by-round traces of the block transform, for visualizing the cipher.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::block::Block;
use crate::cipher::{decrypt_observed, encrypt_observed};
use crate::key::KeySchedule;

/// Which transformation produced a traced state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// The block before any transformation.
    Input,
    /// XOR with the round key.
    AddRoundKey,
    /// S-box substitution.
    SubBytes,
    /// Row rotation.
    ShiftRows,
    /// Column mixing.
    MixColumns,
    /// Inverse S-box substitution.
    InvSubBytes,
    /// Inverse row rotation.
    InvShiftRows,
    /// Inverse column mixing.
    InvMixColumns,
}

impl Stage {
    /// Conventional FIPS-197 name of the stage.
    pub fn name(self) -> &'static str {
        match self {
            Self::Input => "Input",
            Self::AddRoundKey => "AddRoundKey",
            Self::SubBytes => "SubBytes",
            Self::ShiftRows => "ShiftRows",
            Self::MixColumns => "MixColumns",
            Self::InvSubBytes => "InvSubBytes",
            Self::InvShiftRows => "InvShiftRows",
            Self::InvMixColumns => "InvMixColumns",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// The state right after one stage of one round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceStep {
    /// Index of the round key this round uses.
    pub round: usize,
    /// Transformation just applied.
    pub stage: Stage,
    /// Resulting state.
    pub state: Block,
}

/// Ordered record of every intermediate state of one block transform.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace {
    /// Steps in execution order, beginning with [`Stage::Input`].
    pub steps: Vec<TraceStep>,
}

impl Trace {
    fn record(&mut self, round: usize, stage: Stage, state: &Block) {
        self.steps.push(TraceStep {
            round,
            stage,
            state: *state,
        });
    }

    /// State after the last stage, i.e. the transform's output.
    pub fn output(&self) -> Option<&Block> {
        self.steps.last().map(|step| &step.state)
    }

    /// Steps belonging to `round`.
    pub fn round(&self, round: usize) -> impl Iterator<Item = &TraceStep> {
        self.steps.iter().filter(move |step| step.round == round)
    }
}

/// Encrypts `block`, recording the state after every stage.
pub fn trace_encrypt(block: &Block, schedule: &KeySchedule) -> Trace {
    let mut trace = Trace::default();
    encrypt_observed(block, schedule, |round, stage, state| {
        trace.record(round, stage, state)
    });
    trace
}

/// Decrypts `block`, recording the state after every stage.
pub fn trace_decrypt(block: &Block, schedule: &KeySchedule) -> Trace {
    let mut trace = Trace::default();
    decrypt_observed(block, schedule, |round, stage, state| {
        trace.record(round, stage, state)
    });
    trace
}

/// Displays a block as its 4×4 state matrix, one row per line.
#[derive(Clone, Copy, Debug)]
pub struct StateGrid<'a>(pub &'a Block);

impl fmt::Display for StateGrid<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..4 {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..4 {
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{:02x}", self.0[row + 4 * col])?;
            }
        }
        Ok(())
    }
}
