mod get_portfolio;

pub use get_portfolio::{GetPortfolioError, GetPortfolioUseCase, PortfolioView, ReadyPortfolio};
