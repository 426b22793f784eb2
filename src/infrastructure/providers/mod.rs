pub mod finnhub;
pub mod newsapi;
pub mod rss;
pub mod trading_economics;
