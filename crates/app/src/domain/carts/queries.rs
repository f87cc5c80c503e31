//! GraphQL documents for cart operations.

pub(super) const GET_CART_QUERY: &str = r"
query CartLineItemsQuery($cartId: String) {
  site {
    cart(entityId: $cartId) {
      entityId
      currencyCode
      lineItems {
        physicalItems {
          ...PhysicalLineItemFields
        }
        digitalItems {
          ...DigitalLineItemFields
        }
      }
    }
  }
}

fragment PhysicalLineItemFields on CartPhysicalItem {
  entityId
  productEntityId
  variantEntityId
  name
  quantity
  selectedOptions {
    ...SelectedOptionFields
  }
}

fragment DigitalLineItemFields on CartDigitalItem {
  entityId
  productEntityId
  variantEntityId
  name
  quantity
  selectedOptions {
    ...SelectedOptionFields
  }
}

fragment SelectedOptionFields on CartSelectedOption {
  __typename
  entityId
  name
  ... on CartSelectedMultipleChoiceOption {
    value
    valueEntityId
  }
  ... on CartSelectedCheckboxOption {
    value
    valueEntityId
  }
  ... on CartSelectedNumberFieldOption {
    number
  }
  ... on CartSelectedTextFieldOption {
    text
  }
  ... on CartSelectedMultiLineTextFieldOption {
    text
  }
  ... on CartSelectedDateFieldOption {
    date {
      utc
    }
  }
}
";

pub(super) const UPDATE_LINE_ITEM_MUTATION: &str = r"
mutation UpdateCartLineItemMutation($input: UpdateCartLineItemInput!) {
  cart {
    updateCartLineItem(input: $input) {
      cart {
        entityId
      }
    }
  }
}
";

pub(super) const DELETE_LINE_ITEM_MUTATION: &str = r"
mutation DeleteCartLineItemMutation($input: DeleteCartLineItemInput!) {
  cart {
    deleteCartLineItem(input: $input) {
      cart {
        entityId
      }
    }
  }
}
";
