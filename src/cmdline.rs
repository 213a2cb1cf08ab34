use std::env;
use std::ffi::OsString;

pub struct Cli {
    /// Print the constants report after the sizes
    pub show_constants: bool,
}

impl Cli {
    pub fn parse() -> Self {
        Self::from_args(env::args_os())
    }

    /**
     * Any argument after the program name turns on the constants report. Its
     * value is never looked at, so it need not even be valid UTF-8.
     */
    pub fn from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut args = args.into_iter().skip(1);
        Self {
            show_constants: args.next().is_some(),
        }
    }
}
