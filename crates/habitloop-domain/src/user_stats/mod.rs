mod repository;

pub use repository::UserStatsRepository;
