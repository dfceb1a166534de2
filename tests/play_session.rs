use std::io::Cursor;

use tictree::{
    Board, Error, Outcome, Player,
    adapters::{ConsoleObserver, HumanController, SolverController},
    play::{PlaySession, SessionConfig},
};

/// A person who always tries the cells in order, starting where they left off
fn scanning_human() -> HumanController<Cursor<Vec<u8>>, Vec<u8>> {
    let script = "0\n1\n2\n3\n4\n5\n6\n7\n8\n".repeat(5);
    HumanController::new("You", Cursor::new(script.into_bytes()), Vec::new())
}

#[test]
fn solver_punishes_a_careless_human_playing_x() {
    let mut human = scanning_human();
    let mut solver = SolverController::new("Solver");
    let mut observer = ConsoleObserver::new(Vec::new(), Some(Player::X));

    let record = PlaySession::default()
        .run(&mut human, &mut solver, &mut observer)
        .unwrap();

    assert_eq!(record.positions(), vec![0, 4, 1, 2, 3, 6]);
    assert_eq!(record.outcome, Outcome::Win(Player::O));

    let transcript = String::from_utf8(observer.into_inner()).unwrap();
    assert!(transcript.starts_with("x: you, o: opponent\n"));
    assert!(transcript.ends_with("\nopponent (o) won after 6 moves\n"));
}

#[test]
fn solver_wins_as_x_against_the_same_human() {
    let mut human = scanning_human();
    let mut solver = SolverController::new("Solver");
    let mut observer = ConsoleObserver::new(Vec::new(), Some(Player::O));

    let record = PlaySession::default()
        .run(&mut solver, &mut human, &mut observer)
        .unwrap();

    assert_eq!(record.positions(), vec![0, 1, 3, 2, 6]);
    assert_eq!(record.outcome, Outcome::Win(Player::X));
    assert_eq!(
        record.current_board().unwrap(),
        Board::from_string("XOOX..X..").unwrap()
    );
}

#[test]
fn two_solvers_draw_from_the_empty_board() {
    let mut x = SolverController::new("x");
    let mut o = SolverController::new("o");
    let mut observer = ConsoleObserver::new(Vec::new(), None);

    let record = PlaySession::default()
        .run(&mut x, &mut o, &mut observer)
        .unwrap();

    assert_eq!(record.outcome, Outcome::Draw);
    assert_eq!(record.moves.len(), 9);
}

#[test]
fn session_can_start_mid_game_with_o_to_move() {
    let config = SessionConfig {
        initial: Board::from_string("XX.OO....").unwrap(),
        first_player: Player::O,
        ..SessionConfig::default()
    };
    let mut x = SolverController::new("x");
    let mut o = SolverController::new("o");
    let mut observer = ConsoleObserver::new(Vec::new(), None);

    let record = PlaySession::new(config)
        .run(&mut x, &mut o, &mut observer)
        .unwrap();

    assert_eq!(record.moves.len(), 1);
    assert_eq!(record.moves[0].position, 5);
    assert_eq!(record.outcome, Outcome::Win(Player::O));
}

#[test]
fn running_out_of_input_stops_the_game() {
    let mut human = HumanController::new("You", Cursor::new(Vec::new()), Vec::new());
    let mut solver = SolverController::new("Solver");
    let mut observer = ConsoleObserver::new(Vec::new(), Some(Player::X));

    let err = PlaySession::default()
        .run(&mut human, &mut solver, &mut observer)
        .unwrap_err();
    assert!(matches!(err, Error::InputClosed));
}
