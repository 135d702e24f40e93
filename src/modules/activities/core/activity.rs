use serde::Serialize;

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum DecideError {
    #[error("activity is full ({capacity} participants)")]
    ActivityFull { capacity: usize },

    #[error("participant is not signed up for this activity")]
    NotSignedUp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignUpOutcome {
    SignedUp,
    AlreadySignedUp,
}

/// One extracurricular offering. Only `participants` changes after startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activity {
    #[serde(skip)]
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: usize,
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: usize,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    pub fn with_participants<I, S>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for participant in participants {
            let participant = participant.into();
            if !self.is_signed_up(&participant) {
                self.participants.push(participant);
            }
        }
        self
    }

    pub fn is_signed_up(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants
    }

    /// Membership is checked before capacity, so repeating a sign-up on a
    /// full activity is still a no-op rather than a rejection.
    pub fn sign_up(&mut self, email: &str) -> Result<SignUpOutcome, DecideError> {
        if self.is_signed_up(email) {
            return Ok(SignUpOutcome::AlreadySignedUp);
        }
        if self.is_full() {
            return Err(DecideError::ActivityFull {
                capacity: self.max_participants,
            });
        }
        self.participants.push(email.to_string());
        Ok(SignUpOutcome::SignedUp)
    }

    pub fn unregister(&mut self, email: &str) -> Result<(), DecideError> {
        let position = self
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(DecideError::NotSignedUp)?;
        self.participants.remove(position);
        Ok(())
    }
}
