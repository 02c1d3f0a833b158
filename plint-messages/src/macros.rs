/// Build a message from a template, e.g.
/// `msg!(REPORT_MESSAGES.score_line, score = 87, band = "Very Good")`.
#[macro_export]
macro_rules! msg {
    ($template:expr) => {
        $crate::builder::MessageBuilder::new($template).build()
    };
    ($template:expr, $($key:ident = $value:expr),+ $(,)?) => {
        $crate::builder::MessageBuilder::new($template)
            $(.var(stringify!($key), $value))+
            .build()
    };
}
