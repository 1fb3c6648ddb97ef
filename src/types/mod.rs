mod category;
mod issue;
mod page;

pub use category::Category;
pub use issue::Issue;
pub use page::IssuesPage;
