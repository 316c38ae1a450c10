//! Outbound contact link configuration

pub struct ContactConfig {
    /// Messaging deep-link base; the phone is a fixed digit string
    pub whatsapp_base_url: &'static str,
    /// Pre-filled message is `prefix + product name + suffix`
    pub message_prefix: &'static str,
    pub message_suffix: &'static str,
}

pub const CONTACT: ContactConfig = ContactConfig {
    whatsapp_base_url: "https://wa.me/573053402732",
    message_prefix: "Hola, me interesa el ",
    message_suffix: ". ¿Pueden darme información y precio?",
};
