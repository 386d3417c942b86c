use crate::{Format, PopenModule};

/// Runs `rtl_433` on a complex 16-bit sample stream and reads decoded
/// messages as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rtl433Module {
    sample_rate: u32,
    json_output: bool,
}

impl Default for Rtl433Module {
    fn default() -> Self {
        Self::new(48000, false)
    }
}

impl Rtl433Module {
    /// # Arguments
    ///
    /// * `sample_rate` - Sample rate of the input stream in Hz.
    /// * `json_output` - Emit one JSON object per message instead of key/value text.
    pub fn new(sample_rate: u32, json_output: bool) -> Self {
        Self {
            sample_rate,
            json_output,
        }
    }
}

impl PopenModule for Rtl433Module {
    fn command(&self) -> Vec<String> {
        let output = if self.json_output { "json" } else { "kv" };
        let rate = self.sample_rate.to_string();
        [
            "rtl_433",
            "-r",
            "cs16:-",
            "-s",
            rate.as_str(),
            "-F",
            output,
            // these protocols need more than 48kHz bandwidth
            "-R",
            "-167",
            "-R",
            "-178",
            "-A",
        ]
        .into_iter()
        .map(String::from)
        .collect()
    }

    fn input_format(&self) -> Format {
        Format::ComplexShort
    }

    fn output_format(&self) -> Format {
        Format::Char
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_line() {
        let module = Rtl433Module::new(250000, true);
        assert_eq!(
            module.command().join(" "),
            "rtl_433 -r cs16:- -s 250000 -F json -R -167 -R -178 -A"
        );
    }

    #[test]
    fn test_default_is_key_value_at_48k() {
        let cmd = Rtl433Module::default().command();
        assert!(cmd.windows(2).any(|w| w == ["-s", "48000"]));
        assert!(cmd.windows(2).any(|w| w == ["-F", "kv"]));
    }

    #[test]
    fn test_formats() {
        let module = Rtl433Module::default();
        assert_eq!(module.input_format(), Format::ComplexShort);
        assert_eq!(module.output_format(), Format::Char);
    }

    #[test]
    fn test_process_is_configured() {
        let cmd = Rtl433Module::default().process();
        assert_eq!(cmd.get_program(), "rtl_433");
        assert_eq!(cmd.get_args().count(), 11);
    }
}
