//! Page sections in document order.

mod about;
mod contact;
mod footer;
mod header;
mod hero;
mod projects;
mod skills;

pub(crate) use about::About;
pub(crate) use contact::Contact;
pub(crate) use footer::Footer;
pub(crate) use header::Header;
pub(crate) use hero::Hero;
pub(crate) use projects::Projects;
pub(crate) use skills::Skills;
