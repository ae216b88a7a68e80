mod request;

pub use self::request::RequestFetcher;
