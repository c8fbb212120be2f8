//! casino-hands: poker hand ranking for casino table games
//!
//! Goals:
//! - One stateless evaluator shared by every game: pools in, [`HandResult`](evaluator::HandResult) out
//! - Three-card and five-card rules selected per call, never copied per game
//! - Wild cards resolved exhaustively, with the substitutions reported back
//! - No panics for invalid input; use `Result` for caller errors
//!
//! ## Quick start: best hand out of seven cards
//! ```
//! use casino_hands::cards::{parse_cards, Rank};
//! use casino_hands::evaluator::{evaluate_five_card, Category};
//!
//! let pool = parse_cards("As Ah Kc Qd Jh 3s 2c").unwrap();
//! let hand = evaluate_five_card(&pool).unwrap();
//! assert_eq!(hand.category, Category::Pair);
//! assert_eq!(hand.kickers, vec![Rank::Ace, Rank::King, Rank::Queen, Rank::Jack]);
//! ```
//!
//! ## Wild cards
//! ```
//! use casino_hands::cards::parse_cards;
//! use casino_hands::evaluator::evaluate;
//! use casino_hands::pool::Mode;
//!
//! let eval = evaluate(&parse_cards("9h Th W Qh Kh").unwrap(), Mode::FiveCard).unwrap();
//! assert_eq!(eval.category_name(), "Straight Flush");
//! assert_eq!(eval.wild_substitutions()[0].to_string(), "Jh");
//! ```
//!
//! ## CLI
//! ```sh
//! cargo run -- eval --mode five As Ah W W Kd
//! ```

pub mod cards;
pub mod deck;
pub mod evaluator;
pub mod pool;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
