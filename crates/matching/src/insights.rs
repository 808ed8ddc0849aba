use icebreak_common::types::SearchHit;
use rand::Rng;
use serde::Serialize;

pub const POPULARITY_LIMIT: usize = 10;
pub const CONSTELLATION_GROUPS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionCount {
    pub question: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConstellationNode {
    pub name: String,
    pub group: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConstellationLink {
    pub source: String,
    pub target: String,
}

/// Node list for the dashboard diagram. Links are random and carry no meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Constellation {
    pub nodes: Vec<ConstellationNode>,
    pub links: Vec<ConstellationLink>,
    pub decorative: bool,
}

/// Most frequent questions, descending. Ties keep first-appearance order.
pub fn question_popularity(hits: &[SearchHit]) -> Vec<QuestionCount> {
    let mut counts: Vec<QuestionCount> = Vec::new();

    for question in hits
        .iter()
        .map(|h| &h.fields.question)
        .filter(|q| !q.is_empty())
    {
        match counts.iter_mut().find(|c| &c.question == question) {
            Some(entry) => entry.count += 1,
            None => counts.push(QuestionCount {
                question: question.clone(),
                count: 1,
            }),
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(POPULARITY_LIMIT);
    counts
}

pub fn constellation<R: Rng + ?Sized>(hits: &[SearchHit], rng: &mut R) -> Constellation {
    let mut names: Vec<&str> = Vec::new();
    for hit in hits {
        let person = hit.fields.person.as_str();
        if !person.is_empty() && !names.contains(&person) {
            names.push(person);
        }
    }

    let nodes: Vec<ConstellationNode> = names
        .iter()
        .enumerate()
        .map(|(index, name)| ConstellationNode {
            name: (*name).to_string(),
            group: index % CONSTELLATION_GROUPS,
        })
        .collect();

    let links = if nodes.len() > 1 {
        nodes
            .iter()
            .map(|node| ConstellationLink {
                source: node.name.clone(),
                target: nodes[rng.gen_range(0..nodes.len())].name.clone(),
            })
            .collect()
    } else {
        Vec::new()
    };

    Constellation {
        nodes,
        links,
        decorative: true,
    }
}
