use circonus_types::{Datapoint, GraphDefinition, GraphTemplate, Tag};

/// Turns catalog templates into graph definitions for one check.
#[derive(Debug, Clone)]
pub struct GraphBuilder<'a> {
    display_name: &'a str,
    check_id: u64,
    prefix: &'a str,
    tag_category: &'a str,
}

impl<'a> GraphBuilder<'a> {
    /// `display_name` is the check bundle's display name, used in legends.
    pub fn new(display_name: &'a str, check_id: u64, prefix: &'a str, tag_category: &'a str) -> Self {
        Self {
            display_name,
            check_id,
            prefix,
            tag_category,
        }
    }

    /// Tag that marks a graph as the instance of `template`.
    pub fn ownership_tag(&self, template: &GraphTemplate) -> Tag {
        Tag::new(self.tag_category, template.key)
    }

    pub fn build(&self, template: &GraphTemplate) -> GraphDefinition {
        let mut builder = GraphDefinition::builder(template.title_with_prefix(self.prefix))
            .tag(self.ownership_tag(template).to_string());

        for dp in template.datapoints {
            builder = builder.datapoint(
                Datapoint::new(
                    self.check_id,
                    dp.metric_name,
                    dp.metric_type,
                    dp.axis,
                    dp.color,
                )
                .derive(dp.derive)
                .name(format!("{}: {}", self.display_name, dp.metric_name)),
            );
        }

        if let Some(v) = template.min_left_y {
            builder = builder.min_left_y(v);
        }
        if let Some(v) = template.max_left_y {
            builder = builder.max_left_y(v);
        }
        if let Some(v) = template.min_right_y {
            builder = builder.min_right_y(v);
        }
        if let Some(v) = template.max_right_y {
            builder = builder.max_right_y(v);
        }
        if let Some(style) = template.style {
            builder = builder.style(style);
        }

        builder.build()
    }
}
