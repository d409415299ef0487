//! Shop access endpoints: sign-up, login, token refresh and logout

pub mod login;
pub mod logout;
pub mod refresh;
pub mod signup;
