use avr32_hex::{
    ConfigWord, IntelHexWriteOptions, Segment, USER_PAGE_ADDRESS, UserPageOptions, checked_pin,
    write_intel_hex,
};

use super::error::CliError;
use super::io::{
    default_hex_path, load_binary_input, read_file, remove_file, user_page_stem, with_suffix,
    write_file,
};
use super::types::{Args, CfgWordArgs, Command, MakeHexArgs, MakeUserArgs, ParseCfgArgs};

impl Args {
    pub fn execute(&self) -> Result<(), CliError> {
        match &self.command {
            Command::MakeHex(cmd) => cmd.execute(),
            Command::MakeUser(cmd) => cmd.execute(),
            Command::CfgWord(cmd) => cmd.execute(),
            Command::ParseCfg(cmd) => cmd.execute(),
        }
    }
}

impl MakeHexArgs {
    fn execute(&self) -> Result<(), CliError> {
        let options = IntelHexWriteOptions {
            columns: self.columns,
            prepend_size: self.prepend_size,
        };
        options.validate()?;

        let segment = load_binary_input(&self.binary, self.address)?;
        let hex = write_intel_hex(&segment, &options)?;

        let hex_path = self
            .hex_file
            .clone()
            .unwrap_or_else(|| default_hex_path(&self.binary));
        write_file(&hex_path, &hex)
    }
}

impl MakeUserArgs {
    fn execute(&self) -> Result<(), CliError> {
        let pin = if self.blank {
            None
        } else {
            Some(checked_pin(self.pin)?)
        };
        let options = UserPageOptions {
            serial: self.serial.clone(),
            pin,
            pin_high: self.pin_high,
        };
        let page = options.build()?;

        let stem = user_page_stem(self.file.as_deref(), &self.serial);
        let bin_path = with_suffix(&stem, "bin");
        let hex_path = with_suffix(&stem, "hex");

        write_file(&bin_path, &page)?;
        let segment = Segment::new(USER_PAGE_ADDRESS, page.to_vec());
        let written = write_intel_hex(&segment, &IntelHexWriteOptions::default())
            .map_err(CliError::from)
            .and_then(|hex| write_file(&hex_path, &hex));

        // The intermediate image goes even when the hex write failed.
        let removed = if self.keep_binary {
            Ok(())
        } else {
            remove_file(&bin_path)
        };
        written.and(removed)
    }
}

impl CfgWordArgs {
    fn execute(&self) -> Result<(), CliError> {
        let word = ConfigWord::try_encode(self.pin, self.pin_high)?;
        write_file(&self.output, &word.to_bytes())?;
        println!("Word is: {word}");
        Ok(())
    }
}

impl ParseCfgArgs {
    fn execute(&self) -> Result<(), CliError> {
        let data = read_file(&self.file)?;
        let bytes: [u8; 4] = data.as_slice().try_into().map_err(|_| CliError::InvalidConfigFile {
            path: self.file.clone(),
            len: data.len(),
        })?;

        let word = ConfigWord::from_bytes(bytes);
        if !word.crc_is_valid() {
            tracing::warn!("CRC8 of {} does not match its first 3 bytes", word);
        }

        println!(
            "WORD is: 0x {:02X} {:02X} {:02X} {:02X}",
            bytes[0], bytes[1], bytes[2], bytes[3]
        );
        println!("IO Condition: {}", word.decode());
        Ok(())
    }
}
