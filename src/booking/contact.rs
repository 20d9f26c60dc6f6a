use super::form::is_plausible_email;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    FirstName,
    LastName,
    Email,
    Message,
    Send,
}

impl ContactField {
    pub fn next(&self) -> Self {
        match self {
            ContactField::FirstName => ContactField::LastName,
            ContactField::LastName => ContactField::Email,
            ContactField::Email => ContactField::Message,
            ContactField::Message => ContactField::Send,
            ContactField::Send => ContactField::FirstName,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            ContactField::FirstName => ContactField::Send,
            ContactField::LastName => ContactField::FirstName,
            ContactField::Email => ContactField::LastName,
            ContactField::Message => ContactField::Email,
            ContactField::Send => ContactField::Message,
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            ContactField::FirstName => "First Name",
            ContactField::LastName => "Last Name",
            ContactField::Email => "Email Address",
            ContactField::Message => "Your Message",
            ContactField::Send => "Send Message",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
    focus: ContactField,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            message: String::new(),
            focus: ContactField::FirstName,
        }
    }
}

impl ContactForm {
    pub fn focus(&self) -> ContactField {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::FirstName => &self.first_name,
            ContactField::LastName => &self.last_name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
            ContactField::Send => "",
        }
    }

    pub fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            ContactField::FirstName => Some(&mut self.first_name),
            ContactField::LastName => Some(&mut self.last_name),
            ContactField::Email => Some(&mut self.email),
            ContactField::Message => Some(&mut self.message),
            ContactField::Send => None,
        }
    }

    // Nothing is transmitted; an empty or well-formed email is accepted.
    pub fn is_sendable(&self) -> bool {
        self.email.is_empty() || is_plausible_email(self.email.trim())
    }
}
