use serde::{Deserialize, Serialize};

/// A single RID entry of an `a=simulcast` alternative set.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulcastLayer {
    pub rid: String,
    #[serde(default)]
    pub is_paused: bool,
}

impl SimulcastLayer {
    pub fn new(rid: &str, is_paused: bool) -> Self {
        SimulcastLayer {
            rid: rid.to_owned(),
            is_paused,
        }
    }
}

/// Ordered list of layers, each layer being a list of alternatives.
///
/// `a=simulcast:send hi;mid,lo` holds two layers: `[hi, mid]` and `[lo]`.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulcastLayerList(pub Vec<Vec<SimulcastLayer>>);

impl SimulcastLayerList {
    pub fn add_layer(&mut self, layer: SimulcastLayer) {
        self.0.push(vec![layer]);
    }

    pub fn add_layer_with_alternatives(&mut self, alternatives: Vec<SimulcastLayer>) {
        self.0.push(alternatives);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vec<SimulcastLayer>> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a SimulcastLayerList {
    type Item = &'a Vec<SimulcastLayer>;
    type IntoIter = std::slice::Iter<'a, Vec<SimulcastLayer>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Content of the `a=simulcast` attribute of a media section (RFC 8853).
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulcastDescription {
    #[serde(default)]
    pub send_layers: SimulcastLayerList,
    #[serde(default)]
    pub receive_layers: SimulcastLayerList,
}

impl SimulcastDescription {
    pub fn is_empty(&self) -> bool {
        self.send_layers.is_empty() && self.receive_layers.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_simulcast_description_is_empty() {
        let mut desc = SimulcastDescription::default();
        assert!(desc.is_empty());

        desc.receive_layers
            .add_layer_with_alternatives(vec![SimulcastLayer::new("hi", false)]);
        assert!(!desc.is_empty());
        assert!(desc.send_layers.is_empty());
        assert_eq!(desc.receive_layers.len(), 1);
    }

    #[test]
    fn test_layer_list_keeps_alternatives() {
        let mut list = SimulcastLayerList::default();
        list.add_layer_with_alternatives(vec![
            SimulcastLayer::new("hi", false),
            SimulcastLayer::new("mid", true),
        ]);
        list.add_layer(SimulcastLayer::new("lo", false));

        let rids: Vec<Vec<&str>> = list
            .iter()
            .map(|alternatives| alternatives.iter().map(|l| l.rid.as_str()).collect())
            .collect();
        assert_eq!(rids, vec![vec!["hi", "mid"], vec!["lo"]]);
        assert!(list.0[0][1].is_paused);
    }
}
