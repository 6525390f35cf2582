mod home;
pub use home::Home;

mod tours;
pub use tours::Tours;

mod tour_detail;
pub use tour_detail::TourDetail;

mod categories;
pub use categories::Categories;

mod category_detail;
pub use category_detail::CategoryDetail;

mod about;
pub use about::About;

mod faq;
pub use faq::Faq;

mod contact;
pub use contact::Contact;

mod login;
pub use login::Login;
