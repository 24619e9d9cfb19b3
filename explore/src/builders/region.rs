//! Declaration verbs for a region.

use super::location::LocationBuilder;
use crate::error::Result;
use crate::models::{IntoIdentifier, Location, LocationOptions, Region};

/// Declares a region's name and locations.
pub struct RegionBuilder<'a> {
    region: &'a mut Region,
}

impl<'a> RegionBuilder<'a> {
    pub fn new(region: &'a mut Region) -> Self {
        Self { region }
    }

    pub fn name(&mut self, name: impl Into<String>) -> Result<&mut Self> {
        self.region.set_name(name)?;
        Ok(self)
    }

    /// Build a location in this region and add it.
    ///
    /// Fails when the region already has a location with the same slug.
    pub fn location<F>(
        &mut self,
        slug: impl IntoIdentifier,
        options: LocationOptions,
        declare: F,
    ) -> Result<&mut Location>
    where
        F: FnOnce(&mut LocationBuilder<'_>) -> Result<()>,
    {
        let location = self.region.build_location_with(slug, options, declare)?;
        self.region.add_location(location, false)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{EdgePolicy, ExploreConfig};
    use crate::error::ExploreError;
    use crate::models::{EdgeOptions, Identifier, LocationOptions, Region, RegionOptions};

    fn mushroom_kingdom() -> Region {
        Region::build("mushroom_kingdom", RegionOptions::new(), |r| {
            r.name("The Mushroom Kingdom")?;
            r.location("marios_pad", LocationOptions::new().name("Mario's Pad"), |l| {
                l.description("A cozy little house.")?
                    .go("mushroom_way", EdgeOptions::new().direction("east").derived_name())?;
                Ok(())
            })?;
            r.location("mushroom_way", LocationOptions::new(), |l| {
                l.go("marios_pad", EdgeOptions::new().direction("west"))?
                    .go_to("mushroom_kingdom_castle", EdgeOptions::new().region("castle_grounds"))?;
                Ok(())
            })?;
            Ok(())
        })
        .unwrap()
    }

    #[test]
    fn test_region_block() {
        let region = mushroom_kingdom();
        assert_eq!(region.name(), "The Mushroom Kingdom");
        assert_eq!(region.locations().len(), 2);
        assert!(region.has_location("marios_pad"));
        assert!(region.has_location("Mushroom Way"));

        let pad = region.location("marios_pad").unwrap();
        assert_eq!(pad.name(), "Mario's Pad");
        assert_eq!(pad.region(), Some(region.slug()));
        assert_eq!(pad.exits(), vec!["east to Mushroom Way"]);
    }

    #[test]
    fn test_navigation_between_locations() {
        let region = mushroom_kingdom();
        let way = region.location("mushroom_way").unwrap();

        let back = way.resolve("west").unwrap();
        assert!(region.has_location(back));

        let castle = way.resolve("Mushroom Kingdom Castle").unwrap();
        assert!(!region.has_location(castle));
        assert_eq!(
            way.destination_region(castle.as_str()).map(Identifier::as_str),
            Some("castle_grounds")
        );
    }

    #[test]
    fn test_duplicate_location() {
        let err = Region::build("mushroom_kingdom", RegionOptions::new(), |r| {
            r.location("marios_pad", LocationOptions::new(), |_| Ok(()))?;
            r.location("Marios Pad", LocationOptions::new(), |_| Ok(()))?;
            Ok(())
        })
        .unwrap_err();
        assert_eq!(err, ExploreError::already_exists("location", "marios_pad"));
    }

    #[test]
    fn test_locations_use_region_config() {
        let config = ExploreConfig::default()
            .with_required_region(true)
            .with_edge_policy(EdgePolicy::RejectDuplicateNames);
        let err = Region::build_with_config("bowsers_keep", RegionOptions::new(), config, |r| {
            r.location("entrance", LocationOptions::new(), |l| {
                l.go("lobby", EdgeOptions::new())?
                    .go("side_door", EdgeOptions::new().name("Lobby"))?;
                Ok(())
            })?;
            Ok(())
        })
        .unwrap_err();
        assert_eq!(err, ExploreError::already_exists("edge named", "Lobby"));
    }
}
