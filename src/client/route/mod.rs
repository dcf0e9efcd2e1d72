pub mod home;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod signup;

pub use home::Home;
pub use login::Login;
pub use not_found::NotFound;
pub use profile::Profile;
pub use signup::Signup;
