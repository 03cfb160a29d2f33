//! Advance and retreat through sibling documents.
//!
//! Each call reads the live document set from the host, resolves the
//! current document's group, picks the neighbour in the requested
//! direction and asks the host to activate it. Nothing is kept between
//! calls, so documents opened, closed or renamed in the meantime cannot
//! leave a stale cursor behind.

use anyhow::Result;

use namesake_core::{CycleOutcome, Direction, DocumentHost};
use namesake_group::{resolve_group, Group};
use namesake_logger as logger;
use namesake_navigator::next_document;

/// Activate the next sibling of the current document.
pub fn advance<H: DocumentHost>(host: &mut H) -> Result<CycleOutcome> {
    cycle(host, Direction::Forward)
}

/// Activate the previous sibling of the current document.
pub fn retreat<H: DocumentHost>(host: &mut H) -> Result<CycleOutcome> {
    cycle(host, Direction::Backward)
}

/// Move one step through the current document's group.
///
/// A singleton group yields [`CycleOutcome::Unchanged`] without touching
/// the host. Errors come only from the host and are returned as-is after
/// being logged.
pub fn cycle<H: DocumentHost>(host: &mut H, direction: Direction) -> Result<CycleOutcome> {
    let Some(current) = host.current_document() else {
        logger::debug("Cycle skipped: no current document");
        return Ok(CycleOutcome::NoCurrentDocument);
    };
    let from = host.identity(&current);

    let group = current_group(host, &current)?;
    logger::debug(format!(
        "Cycle {:?} from {} in group '{}' ({} members)",
        direction,
        from,
        group.digest(),
        group.len()
    ));

    let target = match next_document(&from, &group, direction) {
        Some(member) if member.identity() != from => member,
        _ => return Ok(CycleOutcome::Unchanged { current: from }),
    };

    let to = target.identity().to_string();
    if let Err(e) = host.activate(target.document()) {
        logger::warn(format!("Failed to activate {}: {}", to, e));
        return Err(e.context(format!("Failed to activate {}", to)));
    }

    logger::info(format!("Switched {} -> {}", from, to));
    Ok(CycleOutcome::Switched { from, to })
}

/// Identities in the current document's group, in cycling order.
///
/// Empty when the host has no current document.
pub fn siblings<H: DocumentHost>(host: &H) -> Result<Vec<String>> {
    let Some(current) = host.current_document() else {
        return Ok(Vec::new());
    };
    let group = current_group(host, &current)?;
    Ok(group.identities().map(str::to_string).collect())
}

/// Identity the next call in `direction` would activate, without
/// activating it. Returns the current identity for a singleton group.
pub fn peek<H: DocumentHost>(host: &H, direction: Direction) -> Result<Option<String>> {
    let Some(current) = host.current_document() else {
        return Ok(None);
    };
    let from = host.identity(&current);
    let group = current_group(host, &current)?;
    Ok(next_document(&from, &group, direction).map(|member| member.identity().to_string()))
}

fn current_group<H: DocumentHost>(host: &H, current: &H::Document) -> Result<Group<H::Document>> {
    let open = match host.open_documents() {
        Ok(open) => open,
        Err(e) => {
            logger::warn(format!("Failed to list open documents: {}", e));
            return Err(e.context("Failed to list open documents"));
        }
    };
    Ok(resolve_group(current, open, |doc| host.identity(doc)))
}
