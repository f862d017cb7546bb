//! Dependency resolver service.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use crate::domain::{
    AppError, Coordinate, ModuleNode, ModuleResolution, ResolvedDependency, Version,
};
use crate::ports::{PackageManifest, PackageSource};
use crate::services::VersionPinner;

/// Upper bound on graph walks before resolution is declared unstable.
const MAX_PASSES: usize = 32;

/// One walk of a module's graph under a fixed selection.
#[derive(Debug, Default)]
struct GraphWalk {
    requests: BTreeMap<Coordinate, BTreeSet<Version>>,
    direct: BTreeSet<Coordinate>,
    missing: BTreeSet<(Coordinate, Version)>,
}

/// Service for resolving a module's transitive dependencies with forced versions applied.
pub struct DependencyResolver;

impl DependencyResolver {
    /// Resolve every dependency of `module` against `sources`.
    ///
    /// Forced coordinates always select their forced version. Other coordinates
    /// select the highest version requested in any walk so far, so a selection
    /// never moves back down. The graph is re-walked until the selection stops
    /// changing.
    pub fn resolve<S: PackageSource>(
        module: &ModuleNode,
        pinner: &VersionPinner,
        sources: &[S],
    ) -> Result<ModuleResolution, AppError> {
        let mut selection: BTreeMap<Coordinate, Version> = BTreeMap::new();

        for _ in 0..MAX_PASSES {
            let walk = Self::walk(module, pinner, sources, &selection)?;
            let next = Self::select(&walk, &selection, pinner);

            if next == selection {
                if let Some((coordinate, version)) = walk.missing.iter().next() {
                    return Err(AppError::VersionNotFound {
                        coordinate: coordinate.to_string(),
                        version: version.to_string(),
                        searched: Self::searched(sources),
                    });
                }
                return Ok(Self::report(module, walk, &selection, pinner));
            }

            selection = next;
        }

        Err(AppError::ResolutionDidNotConverge {
            module: module.name().to_string(),
            passes: MAX_PASSES,
        })
    }

    fn walk<S: PackageSource>(
        module: &ModuleNode,
        pinner: &VersionPinner,
        sources: &[S],
        selection: &BTreeMap<Coordinate, Version>,
    ) -> Result<GraphWalk, AppError> {
        let mut walk = GraphWalk::default();
        let mut expanded: BTreeSet<Coordinate> = BTreeSet::new();
        let mut queue: VecDeque<_> = module.dependencies().iter().cloned().collect();

        for request in module.dependencies() {
            walk.direct.insert(request.coordinate.clone());
        }

        while let Some(request) = queue.pop_front() {
            walk.requests
                .entry(request.coordinate.clone())
                .or_default()
                .insert(request.version.clone());

            if !expanded.insert(request.coordinate.clone()) {
                continue;
            }

            let version = selection
                .get(&request.coordinate)
                .unwrap_or_else(|| pinner.pin(&request.coordinate, &request.version));

            match Self::lookup(sources, &request.coordinate, version)? {
                Some(manifest) => queue.extend(manifest.dependencies),
                None => {
                    walk.missing.insert((request.coordinate.clone(), version.clone()));
                }
            }
        }

        Ok(walk)
    }

    fn select(
        walk: &GraphWalk,
        selection: &BTreeMap<Coordinate, Version>,
        pinner: &VersionPinner,
    ) -> BTreeMap<Coordinate, Version> {
        let mut next = selection.clone();
        for (coordinate, requested) in &walk.requests {
            let version = match pinner.forced_version(coordinate) {
                Some(forced) => forced,
                None => match (requested.iter().next_back(), selection.get(coordinate)) {
                    (Some(highest), Some(current)) => highest.max(current),
                    (Some(highest), None) => highest,
                    (None, Some(current)) => current,
                    (None, None) => continue,
                },
            };
            next.insert(coordinate.clone(), version.clone());
        }
        next
    }

    fn lookup<S: PackageSource>(
        sources: &[S],
        coordinate: &Coordinate,
        version: &Version,
    ) -> Result<Option<PackageManifest>, AppError> {
        for source in sources {
            if let Some(manifest) = source.lookup(coordinate, version)? {
                return Ok(Some(manifest));
            }
        }
        Ok(None)
    }

    fn searched<S: PackageSource>(sources: &[S]) -> String {
        if sources.is_empty() {
            return "(no repositories configured)".to_string();
        }
        sources.iter().map(|s| s.name()).collect::<Vec<_>>().join(", ")
    }

    fn report(
        module: &ModuleNode,
        walk: GraphWalk,
        selection: &BTreeMap<Coordinate, Version>,
        pinner: &VersionPinner,
    ) -> ModuleResolution {
        let dependencies = walk
            .requests
            .into_iter()
            .filter_map(|(coordinate, requested)| {
                let selected = selection.get(&coordinate)?.clone();
                Some(ResolvedDependency {
                    forced: pinner.forced_version(&coordinate).is_some(),
                    direct: walk.direct.contains(&coordinate),
                    requested: requested.into_iter().collect(),
                    selected,
                    coordinate,
                })
            })
            .collect();

        ModuleResolution { module: module.name().clone(), dependencies }
    }
}
