//! Service Detail Model
//!
//! One marketed offering ("plan"): presentation, commercial terms and a
//! benefit list. The catalog lives inside [`AppConfig::services`] and is
//! replaced as a whole on update.
//!
//! [`AppConfig::services`]: super::app_config::AppConfig

use serde::{Deserialize, Serialize};

use crate::util::snowflake_id;

/// Tag color token used on the service card badge
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagColor {
    Orange,
    Blue,
    Green,
    Purple,
    /// Neutral fallback when no color was picked
    #[default]
    Slate,
}

impl TagColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            TagColor::Orange => "orange",
            TagColor::Blue => "blue",
            TagColor::Green => "green",
            TagColor::Purple => "purple",
            TagColor::Slate => "slate",
        }
    }
}

/// Service catalog entry
///
/// Field names serialize in camelCase so payloads written by earlier
/// releases keep deserializing unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDetail {
    /// Unique within the catalog; seed value or `svc-{snowflake}`
    pub id: String,
    #[serde(default)]
    pub title: String,
    /// Short card description
    #[serde(default)]
    pub description: String,
    /// Long copy for the detail page
    #[serde(default)]
    pub full_description: String,
    /// URL or embedded `data:` payload
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub tag: String,
    #[serde(default)]
    pub tag_color: TagColor,
    /// Promotional emphasis; conceptually at most one per catalog
    #[serde(default)]
    pub popular: bool,
    /// Ordered, one per editor line; empties and duplicates allowed
    #[serde(default)]
    pub benefits: Vec<String>,
    /// Free-form cadence text ("8 aulas", "1 hora/sessão")
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub location: String,
    /// Free-form price text, never parsed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
}

impl ServiceDetail {
    /// New draft with a generated unique id and placeholder content.
    ///
    /// Not part of any catalog until explicitly saved.
    pub fn draft() -> Self {
        Self {
            id: format!("svc-{}", snowflake_id()),
            title: "Novo Serviço".to_string(),
            description: "Breve descrição do serviço.".to_string(),
            full_description: "Descreva aqui em detalhes como funciona este serviço.".to_string(),
            image: String::new(),
            tag: "NOVO".to_string(),
            tag_color: TagColor::Slate,
            popular: false,
            benefits: Vec::new(),
            duration: String::new(),
            location: String::new(),
            price: None,
        }
    }

    /// Default seed catalog shipped with a fresh configuration
    pub fn seed_catalog() -> Vec<ServiceDetail> {
        vec![
            ServiceDetail {
                id: "puppy".to_string(),
                title: "Educação de Filhotes".to_string(),
                description: "Socialização segura, controle de mordidas e o fim do xixi errado."
                    .to_string(),
                full_description: "A fase de filhote é a mais crítica para o desenvolvimento do \
                    cão. Nosso programa foca em prevenir problemas futuros, criando uma base \
                    sólida de confiança e comunicação. Ensinamos seu filhote a gostar de ser \
                    manuseado, a fazer as necessidades no lugar certo e a interagir bem com o \
                    mundo."
                    .to_string(),
                image: "https://santanamendes.com.br/imagens/Site_Adestrador/Site_Adestrador_d0_img11.png"
                    .to_string(),
                tag: "FILHOTES".to_string(),
                tag_color: TagColor::Blue,
                popular: false,
                benefits: vec![
                    "Educação Sanitária (Xixi e Cocô)".to_string(),
                    "Inibição de mordidas".to_string(),
                    "Socialização com pessoas e barulhos".to_string(),
                    "Prevenção de ansiedade de separação".to_string(),
                ],
                duration: "8 aulas".to_string(),
                location: "Domiciliar".to_string(),
                price: Some("R$ 1.200,00".to_string()),
            },
            ServiceDetail {
                id: "obedience".to_string(),
                title: "Obediência Básica".to_string(),
                description: "Comandos essenciais e foco.".to_string(),
                full_description: "Ter um cão obediente significa ter mais liberdade. Ensinamos \
                    comandos funcionais que servem para a vida real, não apenas truques de \
                    circo. Seu cão aprenderá a manter o foco em você mesmo com distrações, \
                    tornando os passeios e a convivência em casa muito mais tranquilos."
                    .to_string(),
                image: "https://santanamendes.com.br/imagens/Site_Adestrador/Site_Adestrador_d0_img12.png"
                    .to_string(),
                tag: "POPULAR".to_string(),
                tag_color: TagColor::Orange,
                popular: true,
                benefits: vec![
                    "Andar junto sem puxar a guia".to_string(),
                    "Comandos: Senta, Fica, Vem".to_string(),
                    "Controle de impulsos (não pular)".to_string(),
                    "Melhora na comunicação dono-cão".to_string(),
                ],
                duration: "10 aulas".to_string(),
                location: "Domiciliar e Parque".to_string(),
                price: Some("R$ 1.500,00".to_string()),
            },
            ServiceDetail {
                id: "behavior".to_string(),
                title: "Comportamental".to_string(),
                description: "Reabilitação de agressividade e medos.".to_string(),
                full_description: "Problemas comportamentais sérios exigem conhecimento técnico \
                    aprofundado. Trabalhamos a modificação comportamental baseada em \
                    desensibilização e contracondicionamento. Ideal para cães reativos, \
                    medrosos ou com histórico de agressividade."
                    .to_string(),
                image: "https://santanamendes.com.br/imagens/Site_Adestrador/Site_Adestrador_d0_img13.png"
                    .to_string(),
                tag: "REABILITAÇÃO".to_string(),
                tag_color: TagColor::Purple,
                popular: false,
                benefits: vec![
                    "Análise funcional do comportamento".to_string(),
                    "Redução de reatividade".to_string(),
                    "Tratamento de fobias e medos".to_string(),
                    "Reconstrução do vínculo de confiança".to_string(),
                ],
                duration: "Sob avaliação".to_string(),
                location: "Domiciliar".to_string(),
                price: Some("Sob Consulta".to_string()),
            },
            ServiceDetail {
                id: "online".to_string(),
                title: "Consultoria Online".to_string(),
                description: "Orientações via videochamada.".to_string(),
                full_description: "Mora longe ou precisa de orientações pontuais? A consultoria \
                    online é perfeita para resolver questões específicas, tirar dúvidas sobre \
                    rotina, adaptação de novos cães ou correções simples que dependem mais da \
                    mudança de atitude do tutor."
                    .to_string(),
                image: "https://images.unsplash.com/photo-1516734212186-a967f81ad0d7?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=60"
                    .to_string(),
                tag: "ONLINE".to_string(),
                tag_color: TagColor::Green,
                popular: false,
                benefits: vec![
                    "Atendimento para qualquer lugar do mundo".to_string(),
                    "Gravação da aula para revisão".to_string(),
                    "Material de apoio em PDF".to_string(),
                    "Flexibilidade de horário".to_string(),
                ],
                duration: "1 hora/sessão".to_string(),
                location: "Google Meet / Zoom".to_string(),
                price: Some("R$ 250,00".to_string()),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_ids_are_unique() {
        let ids: Vec<String> = (0..64).map(|_| ServiceDetail::draft().id).collect();
        let mut dedup = ids.clone();
        dedup.sort();
        dedup.dedup();
        assert_eq!(ids.len(), dedup.len());
        assert!(ids.iter().all(|id| id.starts_with("svc-")));
    }

    #[test]
    fn seed_catalog_ids_are_unique_and_stable() {
        let catalog = ServiceDetail::seed_catalog();
        let ids: Vec<&str> = catalog.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["puppy", "obedience", "behavior", "online"]);
    }

    #[test]
    fn legacy_payload_without_new_fields_deserializes() {
        // A record written before `price` and `popular` existed
        let json = r#"{
            "id": "x",
            "title": "T",
            "description": "d",
            "fullDescription": "fd",
            "image": "",
            "tag": "TAG",
            "tagColor": "blue",
            "benefits": [],
            "duration": "",
            "location": ""
        }"#;
        let s: ServiceDetail = serde_json::from_str(json).unwrap();
        assert!(!s.popular);
        assert_eq!(s.price, None);
        assert_eq!(s.tag_color, TagColor::Blue);
    }
}
