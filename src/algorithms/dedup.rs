use crate::s_list::LinkedList;

/// Removes duplicate values from a sorted linked list.
///
/// Equal values of a sorted list are adjacent, so a single pass that
/// unlinks every successor equal to the current node is enough: O(n),
/// no new nodes, the head node is kept.
pub fn remove_duplicates<T: PartialEq>(mut list: LinkedList<T>) -> LinkedList<T> {
    let mut removed = 0;
    let mut curr = list.head.as_deref_mut();
    while let Some(node) = curr {
        while node
            .next
            .as_ref()
            .is_some_and(|next| next.value == node.value)
        {
            if let Some(mut dup) = node.next.take() {
                node.next = dup.next.take();
                removed += 1;
            }
        }
        curr = node.next.as_deref_mut();
    }
    list.len -= removed;
    tracing::trace!(removed, len = list.len, "removed duplicates");
    list
}
