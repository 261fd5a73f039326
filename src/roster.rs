use gloo_net::http::Request;
use serde::Deserialize;

use crate::parties::Party;

/// One sitting deputy, as scraped from parlamento.pt.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Deputy {
    pub id: String,
    pub name: String,
    pub party: Party,
    pub legislature: String,
    #[serde(rename = "photoUrl")]
    pub photo_url: String,
}

/// One legislative bill proposal.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Proposal {
    pub id: String,
    pub number: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub legislature: String,
    pub session: String,
    pub party: Party,
    pub title: String,
}

/// The two fixed-order reference datasets, loaded once at startup.
///
/// Share tokens address records by position, so the order of these lists
/// is part of the wire format: republishing a reordered roster silently
/// invalidates previously shared links. Accepted limitation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Rosters {
    pub deputies: Vec<Deputy>,
    pub proposals: Vec<Proposal>,
}

impl Rosters {
    pub fn deputy_index(&self, id: &str) -> Option<usize> {
        self.deputies.iter().position(|deputy| deputy.id == id)
    }

    pub fn proposal_index(&self, id: &str) -> Option<usize> {
        self.proposals.iter().position(|proposal| proposal.id == id)
    }
}

#[derive(Debug)]
pub enum DataError {
    Network(String),
    Parse(String),
}

impl DataError {
    fn network<E: std::fmt::Display>(err: E) -> Self {
        Self::Network(err.to_string())
    }

    fn parse<E: std::fmt::Display>(err: E) -> Self {
        Self::Parse(err.to_string())
    }
}

impl std::fmt::Display for DataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataError::Network(message) => write!(f, "network error: {message}"),
            DataError::Parse(message) => write!(f, "data error: {message}"),
        }
    }
}

pub async fn fetch_rosters() -> Result<Rosters, DataError> {
    let deputies: Vec<Deputy> = fetch_json("assets/deputados.json").await?;
    if deputies.is_empty() {
        return Err(DataError::Parse(
            "deputy roster does not contain any entries".to_owned(),
        ));
    }

    // The proposal roster is optional: older deployments shipped without
    // it and the game degrades to deputies only.
    let proposals: Vec<Proposal> = fetch_json("assets/projetos.json").await.unwrap_or_default();

    Ok(Rosters {
        deputies,
        proposals,
    })
}

async fn fetch_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, DataError> {
    let response = Request::get(url).send().await.map_err(DataError::network)?;

    if !response.ok() {
        return Err(DataError::Network(format!(
            "HTTP {} while fetching {}",
            response.status(),
            url
        )));
    }

    let text = response.text().await.map_err(DataError::network)?;
    serde_json::from_str(&text).map_err(DataError::parse)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sample_deputies() -> Vec<Deputy> {
        let entries = [
            ("1001", "Ana Ferreira", Party::Ps),
            ("1002", "Bruno Carvalho", Party::Psd),
            ("1003", "Carla Mendes", Party::Ch),
            ("1004", "Diogo Antunes", Party::Il),
            ("1005", "Elsa Tavares", Party::Be),
            ("1006", "Filipe Cunha", Party::Pcp),
            ("1007", "Graca Lopes", Party::Ps),
            ("1008", "Hugo Baptista", Party::CdsPp),
        ];
        entries
            .into_iter()
            .map(|(id, name, party)| Deputy {
                id: id.to_owned(),
                name: name.to_owned(),
                party,
                legislature: "XVI".to_owned(),
                photo_url: format!("https://app.parlamento.pt/webutils/getimage.aspx?id={id}"),
            })
            .collect()
    }

    pub(crate) fn sample_proposals() -> Vec<Proposal> {
        let entries = [
            ("pl-12", "12/XVI/1", Party::Ps, "Reforco do apoio ao arrendamento"),
            ("pl-45", "45/XVI/1", Party::Ch, "Revisao do regime de estrangeiros"),
            ("pl-77", "77/XVI/1", Party::Be, "Gratuitidade das creches"),
            ("pl-90", "90/XVI/2", Party::Il, "Reducao do IRS jovem"),
        ];
        entries
            .into_iter()
            .map(|(id, number, party, title)| Proposal {
                id: id.to_owned(),
                number: number.to_owned(),
                kind: "Projeto de Lei".to_owned(),
                legislature: "XVI".to_owned(),
                session: "1".to_owned(),
                party,
                title: title.to_owned(),
            })
            .collect()
    }

    pub(crate) fn sample_rosters() -> Rosters {
        Rosters {
            deputies: sample_deputies(),
            proposals: sample_proposals(),
        }
    }

    #[test]
    fn index_lookup_matches_list_position() {
        let rosters = sample_rosters();
        assert_eq!(rosters.deputy_index("1001"), Some(0));
        assert_eq!(rosters.deputy_index("1005"), Some(4));
        assert_eq!(rosters.deputy_index("9999"), None);
        assert_eq!(rosters.proposal_index("pl-90"), Some(3));
        assert_eq!(rosters.proposal_index("pl-00"), None);
    }

    #[test]
    fn deputy_roster_json_shape() {
        let json = r#"[{
            "id": "2374",
            "name": "Mariana Mortagua",
            "party": "BE",
            "legislature": "XVI",
            "photoUrl": "https://app.parlamento.pt/webutils/getimage.aspx?id=2374"
        }]"#;
        let deputies: Vec<Deputy> = serde_json::from_str(json).unwrap();
        assert_eq!(deputies[0].party, Party::Be);
        assert!(deputies[0].photo_url.contains("getimage"));
    }

    #[test]
    fn unknown_party_in_roster_is_a_parse_error() {
        let json = r#"[{
            "id": "1",
            "name": "X",
            "party": "ADN",
            "legislature": "XVI",
            "photoUrl": ""
        }]"#;
        assert!(serde_json::from_str::<Vec<Deputy>>(json).is_err());
    }
}
