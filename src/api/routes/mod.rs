pub mod leaderboards;
pub mod players;
