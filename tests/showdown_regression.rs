use casino_hands::cards::{parse_cards, Card};
use casino_hands::evaluator::{compare, evaluate_five_card, winners, Category};
use casino_hands::pool::Mode;
use std::cmp::Ordering;

// Casino Hold'em style showdown: two hole cards plus a shared five-card board.
fn seven(hole: &str, board: &str) -> Vec<Card> {
    let mut cards = parse_cards(hole).expect("valid hole cards");
    cards.extend(parse_cards(board).expect("valid board"));
    cards
}

fn showdown(a: &str, b: &str, board: &str) -> Ordering {
    compare(&seven(a, board), &seven(b, board), Mode::FiveCard).unwrap()
}

#[test]
fn pair_beats_lower_pair() {
    let ord = showdown("Ks Kh", "Qc Qh", "Ac 9d 4s 2h 6c");
    assert!(ord.is_gt(), "Higher pair should beat lower pair");
}

#[test]
fn pair_kicker_breaks_ties() {
    let ord = showdown("Ks Ad", "Kh Qd", "Kc 9d 4s 2h 6c");
    assert!(ord.is_gt(), "Pair with higher kicker should win");
}

#[test]
fn two_pair_ordering_high_then_low_then_kicker() {
    let ord = showdown("Ks 9c", "Kh 2d", "Kc 9d 4s 2h Ac");
    assert!(ord.is_gt(), "K9 two pair should beat K2 two pair");
}

#[test]
fn straight_top_card_and_wheel() {
    let ord = showdown("Ad 9c", "6d 9h", "5c 4d 3s 2h Kc");
    assert!(ord.is_lt(), "6-high straight should beat wheel A-5");
}

#[test]
fn flush_order_by_kickers() {
    let ord = showdown("Kc Qd", "Qc Jd", "Ac 9c 4c 2c 6d");
    assert!(ord.is_gt(), "Flush with higher second card should win");
}

#[test]
fn full_house_ordering_trips_then_pair() {
    let a = evaluate_five_card(&seven("Ks Ad", "Kc Kd 4s 4h 2c")).unwrap();
    let b = evaluate_five_card(&seven("4d Ah", "Kc Kd 4s 4h 2c")).unwrap();
    assert_eq!(a.category, Category::FullHouse);
    assert_eq!(b.category, Category::FullHouse);
    assert!(a > b, "Full House with higher trips should win");
}

#[test]
fn quads_on_board_kicker_decides() {
    let ord = showdown("Ad 2d", "Qd 3d", "9c 9d 9h 9s Kc");
    assert!(ord.is_gt(), "With quads on board, higher kicker in hand should win");
}

#[test]
fn board_plays_for_both_is_a_split() {
    let board = "Ac Kd Qh Js Tc";
    assert_eq!(showdown("2c 3d", "4h 5s", board), Ordering::Equal);
    let results: Vec<_> = ["2c 3d", "4h 5s", "Ad Ah"]
        .iter()
        .map(|hole| evaluate_five_card(&seven(hole, board)).unwrap())
        .collect();
    assert_eq!(winners(&results), vec![0, 1, 2]);
}

#[test]
fn straight_flush_ordering() {
    let ord = showdown("5c Ad", "Tc Ah", "9c 8c 7c 6c 2d");
    assert!(ord.is_lt(), "Higher straight flush should win");
}

#[test]
fn royal_on_board_ties_everyone() {
    let board = "Th Jh Qh Kh Ah";
    let a = evaluate_five_card(&seven("2c 3c", board)).unwrap();
    assert_eq!(a.category, Category::RoyalFlush);
    assert_eq!(showdown("2c 3c", "9h 8h", board), Ordering::Equal);
}
