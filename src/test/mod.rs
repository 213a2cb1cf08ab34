mod families;
mod layout;
mod util;
