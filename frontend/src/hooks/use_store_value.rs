use yew::prelude::*;

use crate::state::store::Store;

/// Current value of `store`, re-rendering the component whenever it changes
#[hook]
pub fn use_store_value<T: Clone + PartialEq + 'static>(store: &Store<T>) -> T {
    let value = use_state_eq(|| store.get());

    {
        let value = value.clone();
        use_effect_with(store.clone(), move |store| {
            // The store may have changed between first render and subscribing
            value.set(store.get());
            let subscription = store.subscribe(move |next: &T| value.set(next.clone()));
            move || drop(subscription)
        });
    }

    (*value).clone()
}
