pub mod alphabet;
pub mod cli;
pub mod config;
pub mod conversation;
pub mod error;
pub mod render;
pub mod responder;
pub mod rng;
pub mod transliterate;
pub mod turn;

pub use alphabet::{AlphabetTable, Language, LanguageProfile};
pub use conversation::{ConversationLog, Message, Role};
pub use error::{ChatError, Result};
pub use responder::{PhrasePools, ReplyPolicy, Responder, Template, ACKNOWLEDGEMENT};
pub use rng::{FixedSource, RandomSource, RngSource, ScriptedSource};
pub use transliterate::{transliterate, transliterate_id};
pub use turn::{Mode, TurnController, TurnOutcome};
