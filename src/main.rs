use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use nim_td::core::{GameRng, LearnerConfig, NimConfig, PlayerId, TrainingConfig};
use nim_td::learning::{Learner, QLearning, Sarsa};
use nim_td::training::{interactive, play_matches_from, ConsoleHuman, Trainer};

/// Train SARSA and Q-learning agents on Nim, pit them against each other,
/// then play them yourself.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Self-play episodes per agent
    #[arg(long, default_value_t = 10_000)]
    episodes: usize,

    /// Evaluation games between the two agents
    #[arg(long, default_value_t = 100)]
    games: usize,

    /// Learning rate, in (0, 1]
    #[arg(long, default_value_t = 0.5, value_parser = parse_alpha)]
    alpha: f64,

    /// Exploration rate during training, in [0, 1]
    #[arg(long, default_value_t = 0.1, value_parser = parse_epsilon)]
    epsilon: f64,

    /// Base RNG seed
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Your seat (0 moves first); random if omitted
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=1))]
    human_seat: Option<u8>,

    /// Skip playing against the agents
    #[arg(long)]
    no_interactive: bool,

    /// Opening piles, comma separated
    #[arg(long, value_delimiter = ',', default_values_t = vec![1u32, 3, 5, 7])]
    piles: Vec<u32>,
}

impl Args {
    /// Checks clap cannot express per value.
    fn validate(&self) -> Result<(), clap::Error> {
        if self.piles.iter().all(|&p| p == 0) {
            return Err(Args::command().error(
                ErrorKind::ValueValidation,
                "--piles must hold at least one non-empty pile",
            ));
        }
        Ok(())
    }
}

fn parse_probability(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|_| format!("`{s}` is not a number"))?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("{value} is not in [0, 1]"))
    }
}

fn parse_alpha(s: &str) -> Result<f64, String> {
    let alpha = parse_probability(s)?;
    if alpha > 0.0 {
        Ok(alpha)
    } else {
        Err("alpha must be greater than 0".to_string())
    }
}

fn parse_epsilon(s: &str) -> Result<f64, String> {
    parse_probability(s)
}

fn main() -> Result<(), nim_td::NimError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    if let Err(e) = args.validate() {
        e.exit();
    }

    let game = NimConfig::new().with_piles(args.piles.clone());
    let mut seeds = GameRng::new(args.seed);
    let learner = |seed: u64| {
        LearnerConfig::new()
            .with_alpha(args.alpha)
            .with_epsilon(args.epsilon)
            .with_seed(seed)
    };
    let trainer = Trainer::new(
        TrainingConfig::new()
            .with_episodes(args.episodes)
            .with_log_interval((args.episodes / 10).max(1))
            .with_game(game.clone()),
    );

    let mut sarsa = Sarsa::new(learner(seeds.fork().seed()));
    trainer.run(&mut sarsa)?;
    let mut q_learning = QLearning::new(learner(seeds.fork().seed()));
    trainer.run(&mut q_learning)?;

    println!("\n--- AI vs AI: {} vs {} ---", sarsa.name(), q_learning.name());
    let report = play_matches_from(&game, &mut sarsa, &mut q_learning, args.games)?;
    print!("{}", report.render_chart(60, 12));

    if args.no_interactive {
        return Ok(());
    }

    let human_seat = args.human_seat.map(PlayerId::new);
    let mut console = ConsoleHuman::stdio();
    let mut seat_rng = seeds.fork();
    let agents: [&mut dyn Learner; 2] = [&mut sarsa, &mut q_learning];
    for agent in agents {
        println!("\n--- Play against the {} Agent ---", agent.name());
        interactive::play_against_human_from(&game, agent, human_seat, &mut console, &mut seat_rng)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(flags: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("nim-td").chain(flags.iter().copied()))
            .and_then(|args| args.validate().map(|()| args))
    }

    #[test]
    fn test_defaults_parse() {
        let args = parse(&[]).unwrap();
        assert_eq!(args.piles, vec![1, 3, 5, 7]);
        assert_eq!(args.alpha, 0.5);
        assert_eq!(args.epsilon, 0.1);
    }

    #[test]
    fn test_alpha_range() {
        assert_eq!(parse(&["--alpha", "1"]).unwrap().alpha, 1.0);
        for bad in ["0", "1.5", "-0.2", "fast"] {
            let err = parse(&[&format!("--alpha={bad}")]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ValueValidation, "alpha {bad}");
        }
    }

    #[test]
    fn test_epsilon_range() {
        assert_eq!(parse(&["--epsilon", "0"]).unwrap().epsilon, 0.0);
        assert_eq!(parse(&["--epsilon", "1"]).unwrap().epsilon, 1.0);
        for bad in ["1.5", "-0.1", "NaN"] {
            let err = parse(&[&format!("--epsilon={bad}")]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ValueValidation, "epsilon {bad}");
        }
    }

    #[test]
    fn test_piles_need_an_object() {
        assert_eq!(parse(&["--piles", "0,2"]).unwrap().piles, vec![0, 2]);
        let err = parse(&["--piles", "0,0"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert!(parse(&["--piles", "1,x"]).is_err());
    }

    #[test]
    fn test_human_seat_range() {
        assert!(parse(&["--human-seat", "1"]).is_ok());
        assert!(parse(&["--human-seat", "2"]).is_err());
    }

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }
}
