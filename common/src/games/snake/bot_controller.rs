use crate::games::SessionRng;
use super::game_state::SnakeGameState;
use super::input::DirectionInput;
use super::types::{Cell, Direction};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BotType {
    /// Greedy: the safe move that gets closest to the food.
    Efficient,
    /// Any safe move.
    Random,
}

/// Autopilot that plays a session by producing the same direction flags a
/// player's input would.
pub struct BotController;

impl BotController {
    pub fn calculate_input(bot_type: BotType, state: &SnakeGameState, rng: &mut SessionRng) -> DirectionInput {
        if state.outcome().is_terminal() {
            return DirectionInput::none();
        }

        let direction = match bot_type {
            BotType::Efficient => Self::efficient_pathfinding(state, rng),
            BotType::Random => Self::random_valid_move(state, rng),
        };
        direction.map(DirectionInput::only).unwrap_or_default()
    }

    fn efficient_pathfinding(state: &SnakeGameState, rng: &mut SessionRng) -> Option<Direction> {
        let Some(food) = state.food() else {
            return Self::random_valid_move(state, rng);
        };

        let head = state.snake().head().cell;
        Self::safe_directions(state)
            .into_iter()
            .filter_map(|dir| state.grid().neighbor(head, dir).map(|cell| (dir, cell)))
            .min_by_key(|&(_, cell)| Self::manhattan_distance(cell, food))
            .map(|(dir, _)| dir)
            .or_else(|| Self::random_valid_move(state, rng))
    }

    fn random_valid_move(state: &SnakeGameState, rng: &mut SessionRng) -> Option<Direction> {
        let safe_directions = Self::safe_directions(state);
        if safe_directions.is_empty() {
            return None;
        }
        Some(safe_directions[rng.index(safe_directions.len())])
    }

    fn safe_directions(state: &SnakeGameState) -> Vec<Direction> {
        let head = state.snake().head().cell;
        let current = state.direction();

        Direction::ALL
            .into_iter()
            .filter(|d| !d.is_opposite(&current))
            .filter(|&d| {
                state
                    .grid()
                    .neighbor(head, d)
                    .is_some_and(|cell| state.available().contains(cell))
            })
            .collect()
    }

    fn manhattan_distance(a: Cell, b: Cell) -> usize {
        a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::snake::GameOutcome;

    #[test]
    fn test_efficient_heads_for_food() {
        let state = SnakeGameState::from_parts(10, 10, &[(5, 5), (5, 4)], Direction::Up, Some((8, 5)));
        let mut rng = SessionRng::new(1);
        let input = BotController::calculate_input(BotType::Efficient, &state, &mut rng);
        assert_eq!(input, DirectionInput::only(Direction::Right));
    }

    #[test]
    fn test_avoids_walls_and_body() {
        // Head in the corner moving Left: Left is a wall, Down is a wall,
        // Right is a reversal, so only Up remains.
        let state = SnakeGameState::from_parts(10, 10, &[(0, 0), (1, 0)], Direction::Left, Some((9, 0)));
        let mut rng = SessionRng::new(1);
        for bot_type in [BotType::Efficient, BotType::Random] {
            let input = BotController::calculate_input(bot_type, &state, &mut rng);
            assert_eq!(input, DirectionInput::only(Direction::Up));
        }
    }

    #[test]
    fn test_no_safe_move_sends_nothing() {
        let state = SnakeGameState::from_parts(
            3,
            3,
            &[(0, 2), (0, 1), (1, 1), (1, 2)],
            Direction::Up,
            Some((2, 0)),
        );
        let mut rng = SessionRng::new(1);
        let input = BotController::calculate_input(BotType::Random, &state, &mut rng);
        assert!(input.is_empty());
    }

    #[test]
    fn test_efficient_bot_reaches_food() {
        let settings = crate::games::snake::SnakeSessionSettings {
            field_width: 12,
            field_height: 12,
            start_x: 6,
            start_y: 6,
            initial_length: 2,
            move_rate_ms: 100,
            seed: Some(5),
        };
        let mut rng = SessionRng::new(5);
        let mut state = SnakeGameState::new(&settings, &mut rng).unwrap();

        for _ in 0..30 {
            let input = BotController::calculate_input(BotType::Efficient, &state, &mut rng);
            state.update(input, &mut rng);
        }
        assert!(state.score() >= 1);
    }

    #[test]
    fn test_finished_game_gets_no_input() {
        let mut state = SnakeGameState::from_parts(10, 10, &[(0, 0), (1, 0)], Direction::Left, Some((9, 0)));
        let mut rng = SessionRng::new(1);
        state.update(DirectionInput::none(), &mut rng);
        assert!(matches!(state.outcome(), GameOutcome::Lost(_)));
        assert!(BotController::calculate_input(BotType::Efficient, &state, &mut rng).is_empty());
    }
}
