//! Commands for the range randomizer.

use random_core::command::Command;
use uuid::Uuid;

/// Command to generate one random number per item of a batch.
#[derive(Debug, Clone)]
pub struct GenerateRandomNumbers {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
}

impl Command for GenerateRandomNumbers {
    fn command_type(&self) -> &'static str {
        "random.generate"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_command_reports_type_and_correlation_id() {
        let correlation_id = Uuid::new_v4();
        let command = GenerateRandomNumbers { correlation_id };

        assert_eq!(command.command_type(), "random.generate");
        assert_eq!(Command::correlation_id(&command), correlation_id);
    }
}
