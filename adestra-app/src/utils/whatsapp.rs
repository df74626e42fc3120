//! WhatsApp handoff helpers
//!
//! The app's only outbound "write" is a `wa.me` deep link with a pre-filled,
//! URL-encoded message. Two message shapes exist: the booking request from
//! the scheduling wizard and the service inquiry from the detail page.

use shared::{BookingForm, DogSize};

use crate::core::error::{AppError, AppResult};
use crate::utils::phone::digits_only;

/// First name of a display name ("Carlos Eduardo" -> "Carlos")
pub fn first_name(full: &str) -> &str {
    full.split(' ').next().unwrap_or(full)
}

/// Deep link `https://wa.me/{phone}?text={encoded}` for the configured
/// business phone. The message is percent-encoded; spaces become `%20`,
/// not the form-encoded `+`.
pub fn wa_link(phone: &str, message: &str) -> AppResult<reqwest::Url> {
    let digits = digits_only(phone);
    if digits.is_empty() {
        return Err(AppError::Validation(format!("invalid WhatsApp phone: {phone:?}")));
    }
    let mut url = reqwest::Url::parse(&format!("https://wa.me/{digits}"))
        .map_err(|_| AppError::Validation(format!("invalid WhatsApp phone: {phone:?}")))?;
    url.query_pairs_mut().append_pair("text", message);
    // The pair serializer writes spaces as '+'. A literal '+' in the message
    // is already %2B here, so rewriting '+' to %20 is unambiguous.
    let query = url.query().map(|q| q.replace('+', "%20"));
    url.set_query(query.as_deref());
    Ok(url)
}

/// Booking request message (scheduling wizard, step 3 submit)
///
/// Empty breed falls back to "SRD" (mixed breed) and empty time to
/// "A combinar"; both placeholders are part of the product copy.
pub fn booking_message(professional_name: &str, form: &BookingForm) -> String {
    let breed = if form.breed.is_empty() { "SRD" } else { &form.breed };
    let time = if form.time.is_empty() { "A combinar" } else { &form.time };
    format!(
        "Olá {first}! 📅 Gostaria de agendar uma visita.\n\n\
         👤 *Tutor:* {name}\n\
         🐕 *Cão:* {dog} ({breed})\n\
         📱 *Tel:* {phone}\n\n\
         📍 *Local:* {street}, {number}\n\
         {neighborhood} - {city}\n\n\
         🗓 *Data:* {date}\n\
         ⏰ *Hora:* {time}",
        first = first_name(professional_name),
        name = form.name,
        dog = form.dog_name,
        breed = breed,
        phone = form.phone,
        street = form.street,
        number = form.number,
        neighborhood = form.neighborhood,
        city = form.city,
        date = form.date,
        time = time,
    )
}

/// Service inquiry message (service detail page)
pub fn inquiry_message(
    professional_name: &str,
    service_title: &str,
    dog_name: &str,
    breed: &str,
    size: Option<DogSize>,
) -> String {
    let size_label = size.map(|s| s.label()).unwrap_or("Não informado");
    format!(
        "Olá {first}! Gostaria de saber mais sobre o serviço *{title}*.\n\n\
         🐶 *Meu Cão*\n\
         Nome: {dog}\n\
         Raça: {breed}\n\
         Porte: {size}",
        first = first_name(professional_name),
        title = service_title,
        dog = dog_name,
        breed = breed,
        size = size_label,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_form() -> BookingForm {
        BookingForm {
            name: "Maria".to_string(),
            dog_name: "Rex".to_string(),
            breed: String::new(),
            phone: "11988887777".to_string(),
            street: "Av. Paulista".to_string(),
            number: "1000".to_string(),
            neighborhood: "Bela Vista".to_string(),
            city: "São Paulo".to_string(),
            date: "2025-06-10".to_string(),
            time: String::new(),
            ..Default::default()
        }
    }

    #[test]
    fn booking_message_uses_placeholders_for_empty_breed_and_time() {
        let msg = booking_message("Carlos Eduardo", &sample_form());
        assert!(msg.starts_with("Olá Carlos!"));
        assert!(msg.contains("Rex (SRD)"));
        assert!(msg.contains("⏰ *Hora:* A combinar"));
        assert!(msg.contains("🗓 *Data:* 2025-06-10"));
    }

    #[test]
    fn booking_message_keeps_given_breed_and_time() {
        let mut form = sample_form();
        form.breed = "Border Collie".to_string();
        form.time = "14:00".to_string();
        let msg = booking_message("Carlos Eduardo", &form);
        assert!(msg.contains("Rex (Border Collie)"));
        assert!(msg.contains("⏰ *Hora:* 14:00"));
    }

    #[test]
    fn wa_link_targets_phone_and_encodes_text() {
        let url = wa_link("5511999999999", "Olá! Visita & treino").unwrap();
        assert_eq!(url.host_str(), Some("wa.me"));
        assert_eq!(url.path(), "/5511999999999");
        let query = url.query().unwrap();
        assert!(query.starts_with("text="));
        // Ampersand and spaces are percent-encoded, never form-encoded
        assert!(query.contains("%26"));
        assert!(query.contains("%20"));
        assert!(!query.contains(' '));
        assert!(!query.contains('+'));
    }

    #[test]
    fn wa_link_round_trips_a_literal_plus() {
        let url = wa_link("5511999999999", "Treino A+ às 14h").unwrap();
        assert!(url.query().unwrap().contains("%2B"));
        let decoded: String = url
            .query_pairs()
            .find(|(k, _)| k == "text")
            .map(|(_, v)| v.into_owned())
            .unwrap();
        assert_eq!(decoded, "Treino A+ às 14h");
    }

    #[test]
    fn wa_link_rejects_phone_without_digits() {
        assert!(wa_link("abc", "oi").is_err());
    }

    #[test]
    fn inquiry_message_defaults_unknown_size() {
        let msg = inquiry_message("Carlos Eduardo", "Obediência Básica", "Luna", "Poodle", None);
        assert!(msg.contains("*Obediência Básica*"));
        assert!(msg.contains("Porte: Não informado"));
        let sized = inquiry_message("Carlos", "X", "L", "P", Some(DogSize::Medium));
        assert!(sized.contains("Porte: Médio"));
    }
}
